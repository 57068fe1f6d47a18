//! Shared, async-facing form handle
//!
//! A [`FormHandle`] pairs a [`FormController`] with the
//! [`SubmissionHandler`] registered for the screen. Clones share state, so
//! input events keep flowing while a submission is awaiting its handler.

use crate::controller::{FormController, SubmitRejected};
use crate::error::ValidationErrors;
use crate::handler::{SubmissionHandler, SubmissionResult};
use crate::schema::FormSchema;
use crate::values::FieldValues;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What a call to [`FormHandle::submit`] ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
	/// Validation failed; every field is now touched
	Invalid,
	/// Another submission is still in flight; the handler was not called
	Pending,
	Succeeded(T),
	Failed(String),
}

impl<T> SubmitOutcome<T> {
	pub fn is_succeeded(&self) -> bool {
		matches!(self, Self::Succeeded(_))
	}
}

/// Whether the screen owning a form is still shown.
///
/// Clones share the flag. [`FormHandle`] checks it before applying a result,
/// and handlers that drive other state (navigation, for one) can hold a
/// clone and check it after their own awaits.
///
/// ```
/// use staffdesk_forms::MountState;
///
/// let mount = MountState::new();
/// let seen_by_handler = mount.clone();
/// mount.unmount();
/// assert!(!seen_by_handler.is_mounted());
/// ```
#[derive(Debug, Clone)]
pub struct MountState(Arc<AtomicBool>);

impl MountState {
	pub fn new() -> Self {
		Self(Arc::new(AtomicBool::new(true)))
	}

	pub fn is_mounted(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}

	pub fn unmount(&self) {
		self.0.store(false, Ordering::Release);
	}
}

impl Default for MountState {
	fn default() -> Self {
		Self::new()
	}
}

/// Clears the pending flag if a submission ends without reaching its result,
/// either because the `submit` future was dropped or the handler panicked.
struct PendingGuard<'a> {
	form: &'a Mutex<FormController>,
	armed: bool,
}

impl PendingGuard<'_> {
	fn disarm(mut self) {
		self.armed = false;
	}
}

impl Drop for PendingGuard<'_> {
	fn drop(&mut self) {
		if self.armed {
			tracing::debug!("submission abandoned before its handler returned");
			self.form.lock().abandon_submit();
		}
	}
}

/// Handle to one mounted form.
///
/// The controller lock is only taken for synchronous state transitions and
/// is always released before the handler is awaited.
pub struct FormHandle<H: SubmissionHandler> {
	form: Arc<Mutex<FormController>>,
	handler: Arc<H>,
	mount: MountState,
}

impl<H: SubmissionHandler> Clone for FormHandle<H> {
	fn clone(&self) -> Self {
		Self {
			form: Arc::clone(&self.form),
			handler: Arc::clone(&self.handler),
			mount: self.mount.clone(),
		}
	}
}

impl<H: SubmissionHandler> FormHandle<H> {
	pub fn new(schema: FormSchema, handler: H) -> Self {
		Self::with_shared_handler(schema, Arc::new(handler))
	}

	pub fn with_shared_handler(schema: FormSchema, handler: Arc<H>) -> Self {
		Self::with_mount_state(schema, handler, MountState::new())
	}

	/// Uses a mount flag the handler already holds a clone of
	pub fn with_mount_state(schema: FormSchema, handler: Arc<H>, mount: MountState) -> Self {
		Self {
			form: Arc::new(Mutex::new(FormController::new(schema))),
			handler,
			mount,
		}
	}

	pub fn handler(&self) -> &H {
		&self.handler
	}

	pub fn set_field_value(&self, field: &str, value: impl Into<String>) {
		self.form.lock().set_field_value(field, value);
	}

	pub fn set_field_touched(&self, field: &str) {
		self.form.lock().set_field_touched(field);
	}

	pub fn value(&self, field: &str) -> String {
		self.form.lock().value(field).to_string()
	}

	pub fn values(&self) -> FieldValues {
		self.form.lock().values().clone()
	}

	/// Errors of touched fields
	pub fn errors(&self) -> ValidationErrors {
		self.form.lock().errors()
	}

	pub fn all_errors(&self) -> ValidationErrors {
		self.form.lock().all_errors().clone()
	}

	pub fn is_valid(&self) -> bool {
		self.form.lock().is_valid()
	}

	pub fn is_pending(&self) -> bool {
		self.form.lock().is_pending()
	}

	pub fn form_error(&self) -> Option<String> {
		self.form.lock().form_error().map(str::to_string)
	}

	pub fn reset(&self) {
		self.form.lock().reset();
	}

	pub fn is_mounted(&self) -> bool {
		self.mount.is_mounted()
	}

	pub fn mount_state(&self) -> &MountState {
		&self.mount
	}

	/// Marks the screen as discarded.
	///
	/// Submissions already in flight still run to completion, but their
	/// results no longer touch the form state.
	pub fn unmount(&self) {
		self.mount.unmount();
	}

	/// Validates, hands a snapshot to the handler, and applies its result.
	///
	/// Dropping the returned future before it completes, or a panicking
	/// handler, releases the pending flag so the form can be submitted again.
	pub async fn submit(&self) -> SubmitOutcome<H::Output> {
		let snapshot = {
			let mut form = self.form.lock();
			match form.begin_submit() {
				Ok(snapshot) => snapshot,
				Err(SubmitRejected::Invalid) => return SubmitOutcome::Invalid,
				Err(SubmitRejected::Pending) => {
					tracing::debug!("submission already in flight, ignoring");
					return SubmitOutcome::Pending;
				}
			}
		};

		let guard = PendingGuard {
			form: &self.form,
			armed: true,
		};
		let result = self.handler.handle(snapshot).await;
		guard.disarm();

		if self.is_mounted() {
			self.form.lock().finish_submit(&result);
		} else {
			tracing::debug!(
				success = result.is_success(),
				"form unmounted before submission completed, discarding result"
			);
		}

		match result {
			SubmissionResult::Success(value) => SubmitOutcome::Succeeded(value),
			SubmissionResult::Failure(reason) => SubmitOutcome::Failed(reason),
		}
	}
}

impl<H: SubmissionHandler> std::fmt::Debug for FormHandle<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormHandle")
			.field("form", &*self.form.lock())
			.field("mounted", &self.is_mounted())
			.finish_non_exhaustive()
	}
}
