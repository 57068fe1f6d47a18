//! Sign-in

use super::reason_or;
use crate::navigation::{Navigator, ScreenId};
use crate::session::CurrentSession;
use async_trait::async_trait;
use staffdesk_auth::{AuthBackend, Session};
use staffdesk_forms::schemas::field;
use staffdesk_forms::{FormSnapshot, MountState, SubmissionHandler, SubmissionResult};
use std::sync::Arc;

/// Form-level error when the provider gives no reason
pub const SIGN_IN_FALLBACK: &str = "Sign In Failed";

/// Signs in against the [`AuthBackend`] and opens the dashboard.
///
/// A rejection leaves the user on the sign-in screen with the provider's
/// reason as the form-level error. If the sign-in screen was left while the
/// backend call was in flight, the session is still recorded but the
/// dashboard is not opened.
pub struct SignInHandler {
	backend: Arc<dyn AuthBackend>,
	navigator: Arc<dyn Navigator>,
	session: CurrentSession,
	mount: MountState,
}

impl SignInHandler {
	pub fn new(backend: Arc<dyn AuthBackend>, navigator: Arc<dyn Navigator>, session: CurrentSession) -> Self {
		Self {
			backend,
			navigator,
			session,
			mount: MountState::new(),
		}
	}

	/// Share the mount flag of the form this handler is registered with
	pub fn with_mount_state(mut self, mount: MountState) -> Self {
		self.mount = mount;
		self
	}
}

#[async_trait]
impl SubmissionHandler for SignInHandler {
	type Output = Session;

	async fn handle(&self, values: FormSnapshot) -> SubmissionResult<Session> {
		let email = values.trimmed(field::EMAIL);
		let password = values.get(field::PASSWORD);

		match self.backend.sign_in(email, password).await {
			Ok(session) => {
				self.session.set(session.clone());
				if !self.mount.is_mounted() {
					tracing::debug!("sign-in screen left before sign-in completed, staying put");
				} else if let Err(e) = self.navigator.go_to(ScreenId::Dashboard) {
					tracing::warn!(error = %e, "failed to open dashboard after sign-in");
				}
				SubmissionResult::Success(session)
			}
			Err(e) => {
				tracing::warn!(error = %e, "sign-in failed");
				SubmissionResult::Failure(reason_or(&e, SIGN_IN_FALLBACK))
			}
		}
	}
}
