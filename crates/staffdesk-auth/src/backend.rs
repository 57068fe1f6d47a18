//! Authentication collaborator

use crate::error::AuthResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	pub uid: String,
	pub email: String,
	pub token: String,
	pub issued_at: DateTime<Utc>,
}

/// A newly created account.
///
/// Creating an account also signs the user in, so the account carries the
/// session that was opened for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	pub uid: String,
	pub email: String,
	pub created_at: DateTime<Utc>,
	pub session: Session,
}

/// Email/password authentication provider
///
/// # Example
///
/// ```
/// use staffdesk_auth::{AuthBackend, InMemoryAuthBackend};
///
/// # tokio_test::block_on(async {
/// let backend = InMemoryAuthBackend::new();
/// let account = backend.sign_up("ada@example.com", "Abc12345").await.unwrap();
///
/// let session = backend.sign_in("ada@example.com", "Abc12345").await.unwrap();
/// assert_eq!(session.uid, account.uid);
///
/// let rejected = backend.sign_in("ada@example.com", "wrong").await.unwrap_err();
/// assert_eq!(rejected.to_string(), "invalid-credential");
/// # })
/// ```
#[async_trait]
pub trait AuthBackend: Send + Sync {
	/// Sign in with existing credentials
	async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;

	/// Create an account and sign it in
	async fn sign_up(&self, email: &str, password: &str) -> AuthResult<Account>;

	/// End a session
	async fn sign_out(&self, session: &Session) -> AuthResult<()>;
}
