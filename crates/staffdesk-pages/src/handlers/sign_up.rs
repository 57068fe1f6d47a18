//! Sign-up
//!
//! Account creation is the only step the user waits for. Once the account
//! exists the dashboard replaces the sign-up screen right away, and the
//! profile document is written by a detached task. A failed profile write
//! goes to the [`ErrorSink`]; it is not retried and does not undo the
//! navigation.

use super::reason_or;
use crate::navigation::{Navigator, ScreenId};
use crate::report::ErrorSink;
use crate::session::CurrentSession;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use staffdesk_auth::{Account, AuthBackend, Document, DocumentStore};
use staffdesk_forms::schemas::field;
use staffdesk_forms::{FormSnapshot, MountState, SubmissionHandler, SubmissionResult};
use std::sync::Arc;
use tokio::sync::watch;

/// Form-level error when the provider gives no reason
pub const SIGN_UP_FALLBACK: &str = "Sign Up Failed";

/// Collection holding one profile document per account, keyed by uid
pub const USERS_COLLECTION: &str = "users";

/// Context attached to profile write failures
pub const PROFILE_SAVE_CONTEXT: &str = "Error saving user data";

/// Progress of the most recent sign-up
///
/// ```text
/// Idle -> Submitting -> AccountCreated -> ProfileWritten
///             |                       \-> ProfileWriteFailed
///             \-> Idle (account creation failed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpPhase {
	#[default]
	Idle,
	Submitting,
	AccountCreated,
	ProfileWritten,
	ProfileWriteFailed,
}

impl SignUpPhase {
	/// No further transition follows without a new submission
	pub fn is_settled(self) -> bool {
		matches!(
			self,
			SignUpPhase::Idle | SignUpPhase::ProfileWritten | SignUpPhase::ProfileWriteFailed
		)
	}
}

pub struct SignUpHandler {
	backend: Arc<dyn AuthBackend>,
	store: Arc<dyn DocumentStore>,
	navigator: Arc<dyn Navigator>,
	session: CurrentSession,
	errors: Arc<dyn ErrorSink>,
	phase: Arc<watch::Sender<SignUpPhase>>,
	mount: MountState,
}

impl SignUpHandler {
	pub fn new(
		backend: Arc<dyn AuthBackend>,
		store: Arc<dyn DocumentStore>,
		navigator: Arc<dyn Navigator>,
		session: CurrentSession,
		errors: Arc<dyn ErrorSink>,
	) -> Self {
		let (phase, _) = watch::channel(SignUpPhase::Idle);
		Self {
			backend,
			store,
			navigator,
			session,
			errors,
			phase: Arc::new(phase),
			mount: MountState::new(),
		}
	}

	/// Share the mount flag of the form this handler is registered with
	pub fn with_mount_state(mut self, mount: MountState) -> Self {
		self.mount = mount;
		self
	}

	/// Subscribe to phase changes
	pub fn phase(&self) -> watch::Receiver<SignUpPhase> {
		self.phase.subscribe()
	}

	pub fn current_phase(&self) -> SignUpPhase {
		*self.phase.borrow()
	}

	fn spawn_profile_write(&self, uid: String, profile: Document) {
		let store = Arc::clone(&self.store);
		let errors = Arc::clone(&self.errors);
		let phase = Arc::clone(&self.phase);

		tokio::spawn(async move {
			match store.write_document(USERS_COLLECTION, &uid, profile).await {
				Ok(()) => {
					tracing::info!(uid = %uid, "user profile saved");
					phase.send_replace(SignUpPhase::ProfileWritten);
				}
				Err(e) => {
					errors.report(PROFILE_SAVE_CONTEXT, &e);
					phase.send_replace(SignUpPhase::ProfileWriteFailed);
				}
			}
		});
	}
}

/// Profile document stored under `users/<uid>`
fn profile_document(values: &FormSnapshot, created_at: DateTime<Utc>) -> Document {
	Document::new()
		.with("fullName", values.trimmed(field::FULL_NAME))
		.with("email", values.trimmed(field::EMAIL))
		.with("phone", values.trimmed(field::PHONE))
		.with("createdAt", created_at)
}

#[async_trait]
impl SubmissionHandler for SignUpHandler {
	type Output = Account;

	async fn handle(&self, values: FormSnapshot) -> SubmissionResult<Account> {
		self.phase.send_replace(SignUpPhase::Submitting);

		let email = values.trimmed(field::EMAIL);
		let password = values.get(field::PASSWORD);

		let account = match self.backend.sign_up(email, password).await {
			Ok(account) => account,
			Err(e) => {
				tracing::warn!(error = %e, "sign-up failed");
				self.phase.send_replace(SignUpPhase::Idle);
				return SubmissionResult::Failure(reason_or(&e, SIGN_UP_FALLBACK));
			}
		};

		self.session.set(account.session.clone());
		self.phase.send_replace(SignUpPhase::AccountCreated);

		if !self.mount.is_mounted() {
			tracing::debug!("sign-up screen left before account creation completed, staying put");
		} else if let Err(e) = self.navigator.replace_with(ScreenId::Dashboard) {
			tracing::warn!(error = %e, "failed to open dashboard after sign-up");
		}

		self.spawn_profile_write(account.uid.clone(), profile_document(&values, account.created_at));

		SubmissionResult::Success(account)
	}
}
