//! Authentication and document-store error types

use thiserror::Error;

/// Error codes reported by the authentication provider
pub mod codes {
	pub const INVALID_CREDENTIAL: &str = "invalid-credential";
	pub const EMAIL_ALREADY_IN_USE: &str = "email-already-in-use";
	pub const WEAK_PASSWORD: &str = "weak-password";
	pub const NETWORK_REQUEST_FAILED: &str = "network-request-failed";
	pub const INTERNAL_ERROR: &str = "internal-error";
}

/// Authentication errors
///
/// `Rejected` and `Unavailable` display their reason unchanged, since the
/// reason is shown to the user as the form-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
	/// The provider refused the request (bad credentials, duplicate email, ...)
	#[error("{0}")]
	Rejected(String),

	/// The provider could not be reached or failed internally
	#[error("{0}")]
	Unavailable(String),

	/// Password hashing or hash parsing failed
	#[error("Password hashing failed: {0}")]
	Hashing(String),
}

impl AuthError {
	pub fn reason(&self) -> &str {
		match self {
			AuthError::Rejected(reason) | AuthError::Unavailable(reason) | AuthError::Hashing(reason) => {
				reason
			}
		}
	}
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	#[error("Invalid document path: {0}")]
	InvalidPath(String),

	#[error("Permission denied: {0}")]
	PermissionDenied(String),

	#[error("Document store unavailable: {0}")]
	Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AuthError::Rejected(codes::INVALID_CREDENTIAL.to_string()), "invalid-credential")]
	#[case(AuthError::Unavailable(codes::NETWORK_REQUEST_FAILED.to_string()), "network-request-failed")]
	fn test_provider_errors_display_reason_verbatim(#[case] error: AuthError, #[case] expected: &str) {
		// Act
		let shown = error.to_string();

		// Assert
		assert_eq!(shown, expected);
		assert_eq!(error.reason(), expected);
	}

	#[rstest]
	fn test_store_error_display() {
		// Arrange
		let error = StoreError::Unavailable("offline".to_string());

		// Act & Assert
		assert_eq!(error.to_string(), "Document store unavailable: offline");
	}
}
