//! App wiring
//!
//! [`App`] holds the collaborators shared by every screen and mounts
//! screens on demand. Each mount starts from fresh form state.

use crate::handlers::{EmployeeIntakeHandler, SignInHandler, SignUpHandler};
use crate::navigation::{Navigator, StackNavigator};
use crate::report::{ErrorSink, TracingErrorSink};
use crate::screens::{Dashboard, Home};
use crate::session::CurrentSession;
use staffdesk_auth::{AuthBackend, DocumentStore, InMemoryAuthBackend, InMemoryDocumentStore};
use staffdesk_conf::BackendSettings;
use staffdesk_forms::{FormHandle, MountState, schemas};
use std::sync::Arc;

pub type EmployeeForm = FormHandle<EmployeeIntakeHandler>;
pub type SignInForm = FormHandle<SignInHandler>;
pub type SignUpForm = FormHandle<SignUpHandler>;

/// Shared collaborators and screen factory
///
/// # Examples
///
/// ```
/// use staffdesk_pages::{App, Navigator, ScreenId};
///
/// let app = App::in_memory();
/// app.home().open_employee_form().unwrap();
/// assert_eq!(app.navigator().current(), ScreenId::EmployeeForm);
///
/// let form = app.employee_form();
/// assert!(!form.is_valid());
/// ```
#[derive(Clone)]
pub struct App {
	auth: Arc<dyn AuthBackend>,
	store: Arc<dyn DocumentStore>,
	navigator: Arc<dyn Navigator>,
	errors: Arc<dyn ErrorSink>,
	session: CurrentSession,
	settings: Option<BackendSettings>,
}

impl App {
	pub fn new(
		auth: Arc<dyn AuthBackend>,
		store: Arc<dyn DocumentStore>,
		navigator: Arc<dyn Navigator>,
	) -> Self {
		Self {
			auth,
			store,
			navigator,
			errors: Arc::new(TracingErrorSink),
			session: CurrentSession::new(),
			settings: None,
		}
	}

	/// In-memory collaborators, starting on the home screen
	pub fn in_memory() -> Self {
		Self::new(
			Arc::new(InMemoryAuthBackend::new()),
			Arc::new(InMemoryDocumentStore::new()),
			Arc::new(StackNavigator::new()),
		)
	}

	pub fn with_error_sink(mut self, errors: Arc<dyn ErrorSink>) -> Self {
		self.errors = errors;
		self
	}

	pub fn with_settings(mut self, settings: BackendSettings) -> Self {
		tracing::info!(
			project_id = %settings.project_id,
			auth_domain = %settings.auth_domain,
			"backend configured"
		);
		self.settings = Some(settings);
		self
	}

	pub fn settings(&self) -> Option<&BackendSettings> {
		self.settings.as_ref()
	}

	pub fn navigator(&self) -> &Arc<dyn Navigator> {
		&self.navigator
	}

	pub fn session(&self) -> &CurrentSession {
		&self.session
	}

	pub fn home(&self) -> Home {
		Home::new(Arc::clone(&self.navigator))
	}

	pub fn employee_form(&self) -> EmployeeForm {
		FormHandle::new(schemas::employee(), EmployeeIntakeHandler::new())
	}

	pub fn sign_in_form(&self) -> SignInForm {
		let mount = MountState::new();
		let handler = SignInHandler::new(
			Arc::clone(&self.auth),
			Arc::clone(&self.navigator),
			self.session.clone(),
		)
		.with_mount_state(mount.clone());
		FormHandle::with_mount_state(schemas::sign_in(), Arc::new(handler), mount)
	}

	pub fn sign_up_form(&self) -> SignUpForm {
		let mount = MountState::new();
		let handler = SignUpHandler::new(
			Arc::clone(&self.auth),
			Arc::clone(&self.store),
			Arc::clone(&self.navigator),
			self.session.clone(),
			Arc::clone(&self.errors),
		)
		.with_mount_state(mount.clone());
		FormHandle::with_mount_state(schemas::sign_up(), Arc::new(handler), mount)
	}

	pub fn dashboard(&self) -> Dashboard {
		Dashboard::new(
			Arc::clone(&self.navigator),
			Arc::clone(&self.auth),
			self.session.clone(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use staffdesk_forms::schemas::field;

	#[rstest]
	fn test_each_mount_starts_fresh() {
		// Arrange
		let app = App::in_memory();
		let first = app.sign_in_form();
		first.set_field_value(field::EMAIL, "ada@example.com");
		first.set_field_touched(field::EMAIL);

		// Act
		let second = app.sign_in_form();

		// Assert
		assert_eq!(second.value(field::EMAIL), "");
		assert!(second.errors().is_empty());
	}

	#[rstest]
	fn test_settings_are_optional() {
		// Act
		let app = App::in_memory();

		// Assert
		assert!(app.settings().is_none());
		assert!(!app.session().is_signed_in());
	}
}
