//! Screens without forms: home and dashboard

use crate::navigation::{NavigationError, Navigator, ScreenId};
use crate::session::CurrentSession;
use staffdesk_auth::AuthBackend;
use std::sync::Arc;

/// Landing screen with links to the three forms
pub struct Home {
	navigator: Arc<dyn Navigator>,
}

impl Home {
	pub fn new(navigator: Arc<dyn Navigator>) -> Self {
		Self { navigator }
	}

	pub fn open_employee_form(&self) -> Result<(), NavigationError> {
		self.navigator.go_to(ScreenId::EmployeeForm)
	}

	pub fn open_sign_in(&self) -> Result<(), NavigationError> {
		self.navigator.go_to(ScreenId::SignIn)
	}

	pub fn open_sign_up(&self) -> Result<(), NavigationError> {
		self.navigator.go_to(ScreenId::SignUp)
	}
}

/// Screen shown after signing in or signing up
pub struct Dashboard {
	navigator: Arc<dyn Navigator>,
	backend: Arc<dyn AuthBackend>,
	session: CurrentSession,
}

impl Dashboard {
	pub fn new(navigator: Arc<dyn Navigator>, backend: Arc<dyn AuthBackend>, session: CurrentSession) -> Self {
		Self {
			navigator,
			backend,
			session,
		}
	}

	/// Email of the signed-in user, if any
	pub fn signed_in_as(&self) -> Option<String> {
		self.session.get().map(|s| s.email)
	}

	pub fn add_employee(&self) -> Result<(), NavigationError> {
		self.navigator.go_to(ScreenId::EmployeeForm)
	}

	/// Ends the session and returns to the home screen.
	///
	/// The local session is dropped and the home screen shown even when the
	/// provider fails to end the remote session.
	pub async fn log_out(&self) -> Result<(), NavigationError> {
		if let Some(session) = self.session.take()
			&& let Err(e) = self.backend.sign_out(&session).await
		{
			tracing::warn!(uid = %session.uid, error = %e, "sign-out failed");
		}
		tracing::info!("user logged out");
		self.navigator.replace_with(ScreenId::Home)
	}
}
