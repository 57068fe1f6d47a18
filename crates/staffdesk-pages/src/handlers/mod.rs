//! Submission handlers for the three forms

pub mod employee;
pub mod sign_in;
pub mod sign_up;

pub use employee::{CONFIRMATION_TITLE, EmployeeConfirmation, EmployeeIntakeHandler, EmployeeRecord};
pub use sign_in::{SIGN_IN_FALLBACK, SignInHandler};
pub use sign_up::{PROFILE_SAVE_CONTEXT, SIGN_UP_FALLBACK, SignUpHandler, SignUpPhase, USERS_COLLECTION};

use std::error::Error;

/// The error's own text, or `fallback` when it has none
pub(crate) fn reason_or(error: &dyn Error, fallback: &str) -> String {
	let reason = error.to_string();
	if reason.trim().is_empty() {
		fallback.to_string()
	} else {
		reason
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use staffdesk_auth::AuthError;

	#[rstest]
	#[case(AuthError::Rejected("invalid-credential".to_string()), "invalid-credential")]
	#[case(AuthError::Rejected(String::new()), "Sign In Failed")]
	#[case(AuthError::Unavailable("  ".to_string()), "Sign In Failed")]
	fn test_reason_or_fallback(#[case] error: AuthError, #[case] expected: &str) {
		// Act
		let reason = reason_or(&error, SIGN_IN_FALLBACK);

		// Assert
		assert_eq!(reason, expected);
	}
}
