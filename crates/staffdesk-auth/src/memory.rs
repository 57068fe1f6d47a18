//! In-memory collaborators
//!
//! [`InMemoryAuthBackend`] and [`InMemoryDocumentStore`] keep everything in
//! process memory. They back the demo app and the scenario tests, and can be
//! switched into failure modes to simulate an unreachable provider.

use crate::backend::{Account, AuthBackend, Session};
use crate::error::{AuthError, AuthResult, StoreError, StoreResult, codes};
use crate::hasher::{PasswordHasher, SaltedSha256Hasher};
use crate::store::{Document, DocumentStore};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use parking_lot::RwLock;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Minimum password length accepted by the provider
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// How the in-memory backend answers requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
	#[default]
	Success,
	/// Every call fails with `network-request-failed`
	NetworkError,
	/// Every call fails with `internal-error`
	ServerError,
}

impl ErrorMode {
	fn check(self) -> AuthResult<()> {
		match self {
			ErrorMode::Success => Ok(()),
			ErrorMode::NetworkError => Err(AuthError::Unavailable(codes::NETWORK_REQUEST_FAILED.to_string())),
			ErrorMode::ServerError => Err(AuthError::Unavailable(codes::INTERNAL_ERROR.to_string())),
		}
	}
}

#[derive(Debug, Clone)]
struct StoredAccount {
	uid: String,
	email: String,
	password_hash: String,
}

/// In-memory authentication provider
///
/// Emails are matched case-insensitively after trimming. Unknown emails and
/// wrong passwords are both rejected with `invalid-credential`.
pub struct InMemoryAuthBackend {
	accounts: Arc<RwLock<HashMap<String, StoredAccount>>>,
	sessions: Arc<RwLock<HashMap<String, String>>>,
	hasher: Arc<dyn PasswordHasher>,
	error_mode: Arc<RwLock<ErrorMode>>,
}

impl InMemoryAuthBackend {
	pub fn new() -> Self {
		Self::with_hasher(Arc::new(SaltedSha256Hasher::new()))
	}

	pub fn with_hasher(hasher: Arc<dyn PasswordHasher>) -> Self {
		Self {
			accounts: Arc::new(RwLock::new(HashMap::new())),
			sessions: Arc::new(RwLock::new(HashMap::new())),
			hasher,
			error_mode: Arc::new(RwLock::new(ErrorMode::Success)),
		}
	}

	pub fn set_error_mode(&self, mode: ErrorMode) {
		*self.error_mode.write() = mode;
	}

	pub fn error_mode(&self) -> ErrorMode {
		*self.error_mode.read()
	}

	pub fn account_count(&self) -> usize {
		self.accounts.read().len()
	}

	/// Whether `token` belongs to a session that has not been signed out
	pub fn is_session_active(&self, token: &str) -> bool {
		self.sessions.read().contains_key(token)
	}

	fn open_session(&self, uid: &str, email: &str) -> Session {
		let mut bytes = [0u8; 32];
		rand::thread_rng().fill_bytes(&mut bytes);
		let token = URL_SAFE_NO_PAD.encode(bytes);

		self.sessions.write().insert(token.clone(), uid.to_string());

		Session {
			uid: uid.to_string(),
			email: email.to_string(),
			token,
			issued_at: Utc::now(),
		}
	}
}

impl Default for InMemoryAuthBackend {
	fn default() -> Self {
		Self::new()
	}
}

fn normalize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
	async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
		self.error_mode().check()?;

		let key = normalize_email(email);
		let account = self.accounts.read().get(&key).cloned();
		let Some(account) = account else {
			tracing::debug!("sign-in rejected: unknown email");
			return Err(AuthError::Rejected(codes::INVALID_CREDENTIAL.to_string()));
		};

		if !self.hasher.verify(password, &account.password_hash)? {
			tracing::debug!(uid = %account.uid, "sign-in rejected: wrong password");
			return Err(AuthError::Rejected(codes::INVALID_CREDENTIAL.to_string()));
		}

		tracing::info!(uid = %account.uid, "user signed in");
		Ok(self.open_session(&account.uid, &account.email))
	}

	async fn sign_up(&self, email: &str, password: &str) -> AuthResult<Account> {
		self.error_mode().check()?;

		if password.chars().count() < MIN_PASSWORD_LENGTH {
			return Err(AuthError::Rejected(codes::WEAK_PASSWORD.to_string()));
		}

		let key = normalize_email(email);
		let password_hash = self.hasher.hash(password)?;
		let account = StoredAccount {
			uid: Uuid::new_v4().simple().to_string(),
			email: email.trim().to_string(),
			password_hash,
		};

		{
			let mut accounts = self.accounts.write();
			if accounts.contains_key(&key) {
				return Err(AuthError::Rejected(codes::EMAIL_ALREADY_IN_USE.to_string()));
			}
			accounts.insert(key, account.clone());
		}

		tracing::info!(uid = %account.uid, "account created");
		let session = self.open_session(&account.uid, &account.email);
		Ok(Account {
			uid: account.uid,
			email: account.email,
			created_at: session.issued_at,
			session,
		})
	}

	async fn sign_out(&self, session: &Session) -> AuthResult<()> {
		self.error_mode().check()?;

		if self.sessions.write().remove(&session.token).is_some() {
			tracing::info!(uid = %session.uid, "user signed out");
		} else {
			tracing::debug!(uid = %session.uid, "sign-out for unknown session");
		}
		Ok(())
	}
}

/// In-memory document database keyed by `(collection, id)`
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
	documents: Arc<RwLock<HashMap<(String, String), Document>>>,
	failure: Arc<RwLock<Option<StoreError>>>,
}

impl InMemoryDocumentStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes every subsequent write fail with `error`, or succeed again with `None`
	pub fn fail_writes_with(&self, error: Option<StoreError>) {
		*self.failure.write() = error;
	}

	pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
		self.documents
			.read()
			.get(&(collection.to_string(), id.to_string()))
			.cloned()
	}

	pub fn len(&self) -> usize {
		self.documents.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.read().is_empty()
	}
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
	async fn write_document(&self, collection: &str, id: &str, document: Document) -> StoreResult<()> {
		if let Some(error) = self.failure.read().clone() {
			return Err(error);
		}

		if collection.is_empty() || id.is_empty() || collection.contains('/') || id.contains('/') {
			return Err(StoreError::InvalidPath(format!("{}/{}", collection, id)));
		}

		tracing::debug!(collection = %collection, id = %id, fields = document.len(), "document written");
		self.documents
			.write()
			.insert((collection.to_string(), id.to_string()), document);
		Ok(())
	}
}
