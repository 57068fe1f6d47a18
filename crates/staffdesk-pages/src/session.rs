//! Signed-in user shared across screens

use parking_lot::RwLock;
use staffdesk_auth::Session;
use std::sync::Arc;

/// The session of the signed-in user, if any.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
	inner: Arc<RwLock<Option<Session>>>,
}

impl CurrentSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&self, session: Session) {
		*self.inner.write() = Some(session);
	}

	pub fn get(&self) -> Option<Session> {
		self.inner.read().clone()
	}

	/// Removes and returns the session
	pub fn take(&self) -> Option<Session> {
		self.inner.write().take()
	}

	pub fn is_signed_in(&self) -> bool {
		self.inner.read().is_some()
	}
}
