//! Sign-up scenarios, including the best-effort profile write

use rstest::{fixture, rstest};
use staffdesk_auth::{AuthBackend, InMemoryAuthBackend, InMemoryDocumentStore, StoreError};
use staffdesk_forms::SubmitOutcome;
use staffdesk_forms::schemas::{self, field};
use staffdesk_pages::handlers::{PROFILE_SAVE_CONTEXT, USERS_COLLECTION};
use staffdesk_pages::{App, Navigator, RecordingErrorSink, ScreenId, SignUpForm, SignUpPhase, StackNavigator};
use std::sync::Arc;

struct Harness {
	app: App,
	backend: Arc<InMemoryAuthBackend>,
	store: Arc<InMemoryDocumentStore>,
	navigator: Arc<StackNavigator>,
	errors: Arc<RecordingErrorSink>,
}

#[fixture]
fn harness() -> Harness {
	let backend = Arc::new(InMemoryAuthBackend::new());
	let store = Arc::new(InMemoryDocumentStore::new());
	let navigator = Arc::new(StackNavigator::new());
	let errors = Arc::new(RecordingErrorSink::new());
	navigator.go_to(ScreenId::SignUp).expect("open sign-up");
	let app = App::new(backend.clone(), store.clone(), navigator.clone()).with_error_sink(errors.clone());
	Harness {
		app,
		backend,
		store,
		navigator,
		errors,
	}
}

fn fill(form: &SignUpForm, password: &str, confirm: &str) {
	form.set_field_value(field::FULL_NAME, "Ada Lovelace");
	form.set_field_value(field::EMAIL, "ada@example.com");
	form.set_field_value(field::PHONE, "1234567890");
	form.set_field_value(field::PASSWORD, password);
	form.set_field_value(field::CONFIRM_PASSWORD, confirm);
}

async fn settled(form: &SignUpForm) -> SignUpPhase {
	let mut phase = form.handler().phase();
	*phase
		.wait_for(|p| p.is_settled())
		.await
		.expect("phase sender dropped")
}

#[rstest]
#[tokio::test]
async fn test_sign_up_writes_profile_and_replaces_with_dashboard(harness: Harness) {
	// Arrange
	let form = harness.app.sign_up_form();
	fill(&form, "Abc12345", "Abc12345");

	// Act
	let outcome = form.submit().await;
	let phase = settled(&form).await;

	// Assert
	let account = match outcome {
		SubmitOutcome::Succeeded(account) => account,
		other => panic!("expected success, got {:?}", other),
	};
	assert_eq!(phase, SignUpPhase::ProfileWritten);
	assert_eq!(harness.navigator.history(), vec![ScreenId::Home, ScreenId::Dashboard]);
	let profile = harness
		.store
		.get(USERS_COLLECTION, &account.uid)
		.expect("profile written");
	assert_eq!(profile.text("fullName"), Some("Ada Lovelace"));
	assert_eq!(profile.text("email"), Some("ada@example.com"));
	assert_eq!(profile.text("phone"), Some("1234567890"));
	assert!(profile.timestamp("createdAt").is_some());
	assert!(harness.errors.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_profile_write_failure_is_reported_without_undoing_navigation(harness: Harness) {
	// Arrange
	harness
		.store
		.fail_writes_with(Some(StoreError::Unavailable("offline".to_string())));
	let form = harness.app.sign_up_form();
	fill(&form, "Abc12345", "Abc12345");

	// Act
	let outcome = form.submit().await;
	let phase = settled(&form).await;

	// Assert
	assert!(outcome.is_succeeded());
	assert_eq!(phase, SignUpPhase::ProfileWriteFailed);
	assert_eq!(form.form_error(), None);
	assert_eq!(harness.navigator.current(), ScreenId::Dashboard);
	assert!(harness.app.session().is_signed_in());
	assert!(harness.store.is_empty());
	let reports = harness.errors.reports();
	assert_eq!(reports.len(), 1);
	assert_eq!(reports[0].context, PROFILE_SAVE_CONTEXT);
	assert_eq!(reports[0].message, "Document store unavailable: offline");
}

#[rstest]
#[tokio::test]
async fn test_duplicate_email_returns_to_idle_with_reason(harness: Harness) {
	// Arrange
	harness
		.backend
		.sign_up("ada@example.com", "Xyz98765")
		.await
		.expect("seed account");
	let form = harness.app.sign_up_form();
	fill(&form, "Abc12345", "Abc12345");

	// Act
	let outcome = form.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Failed("email-already-in-use".to_string()));
	assert_eq!(form.form_error().as_deref(), Some("email-already-in-use"));
	assert_eq!(form.handler().current_phase(), SignUpPhase::Idle);
	assert_eq!(harness.navigator.current(), ScreenId::SignUp);
	assert!(harness.store.is_empty());
}

#[rstest]
#[case("abc12345", "abc12345", field::PASSWORD, schemas::PASSWORD_COMPLEXITY_MESSAGE)]
#[case("Abc12345", "Abc12346", field::CONFIRM_PASSWORD, schemas::PASSWORD_MISMATCH_MESSAGE)]
#[tokio::test]
async fn test_invalid_passwords_block_submission(
	harness: Harness,
	#[case] password: &str,
	#[case] confirm: &str,
	#[case] failing_field: &str,
	#[case] message: &str,
) {
	// Arrange
	let form = harness.app.sign_up_form();
	fill(&form, password, confirm);

	// Act
	let outcome = form.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Invalid);
	assert_eq!(form.errors().message(failing_field), Some(message));
	assert_eq!(form.handler().current_phase(), SignUpPhase::Idle);
	assert_eq!(harness.backend.account_count(), 0);
}
