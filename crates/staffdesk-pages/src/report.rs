//! Reporting of background failures
//!
//! Best-effort work (such as saving a profile after sign-up) has nobody to
//! return an error to. It reports through an [`ErrorSink`] instead.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::error::Error;
use std::sync::Arc;

/// A failure captured by [`RecordingErrorSink`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
	pub context: String,
	pub message: String,
	pub reported_at: DateTime<Utc>,
}

/// Destination for errors that must not reach the user
pub trait ErrorSink: Send + Sync {
	fn report(&self, context: &str, error: &dyn Error);
}

/// Logs every report at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
	fn report(&self, context: &str, error: &dyn Error) {
		tracing::error!(context = %context, error = %error, "background operation failed");
	}
}

/// Keeps reports in memory, and logs them like [`TracingErrorSink`]
#[derive(Debug, Clone, Default)]
pub struct RecordingErrorSink {
	reports: Arc<Mutex<Vec<ErrorReport>>>,
}

impl RecordingErrorSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reports(&self) -> Vec<ErrorReport> {
		self.reports.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.reports.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.reports.lock().is_empty()
	}
}

impl ErrorSink for RecordingErrorSink {
	fn report(&self, context: &str, error: &dyn Error) {
		TracingErrorSink.report(context, error);
		self.reports.lock().push(ErrorReport {
			context: context.to_string(),
			message: error.to_string(),
			reported_at: Utc::now(),
		});
	}
}
