//! Submission handler seam

use crate::values::FormSnapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome reported by a [`SubmissionHandler`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SubmissionResult<T> {
	Success(T),
	/// The reason becomes the form-level error
	Failure(String),
}

impl<T> SubmissionResult<T> {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub fn failure_reason(&self) -> Option<&str> {
		match self {
			Self::Success(_) => None,
			Self::Failure(reason) => Some(reason),
		}
	}
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for SubmissionResult<T> {
	fn from(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(e) => Self::Failure(e.to_string()),
		}
	}
}

/// Consumes a validated snapshot of a form.
///
/// Handlers only ever see values that passed validation. They may call
/// external collaborators; the form stays responsive while they run.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use staffdesk_forms::{FormSnapshot, SubmissionHandler, SubmissionResult};
///
/// struct Echo;
///
/// #[async_trait]
/// impl SubmissionHandler for Echo {
///     type Output = String;
///
///     async fn handle(&self, values: FormSnapshot) -> SubmissionResult<String> {
///         SubmissionResult::Success(values.get("email").to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait SubmissionHandler: Send + Sync + 'static {
	type Output: Send + 'static;

	async fn handle(&self, values: FormSnapshot) -> SubmissionResult<Self::Output>;
}
