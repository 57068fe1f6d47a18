//! Synchronous form state
//!
//! [`FormController`] owns the values, touched set, validation result,
//! pending flag and form-level error of one mounted form. Every mutation
//! goes through a named method; validation re-runs after each value change.

use crate::error::ValidationErrors;
use crate::handler::SubmissionResult;
use crate::schema::FormSchema;
use crate::validation;
use crate::values::{FieldValues, FormSnapshot};
use indexmap::IndexSet;

/// Why [`FormController::begin_submit`] refused to produce a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
	#[error("form has validation errors")]
	Invalid,
	#[error("a submission is already in flight")]
	Pending,
}

/// State of one form instance.
///
/// # Examples
///
/// ```
/// use staffdesk_forms::{FieldRule, FormController, FormSchema};
///
/// let schema = FormSchema::new()
///     .with_field("email", FieldRule::new().required("Email is required"));
/// let mut form = FormController::new(schema);
///
/// // Untouched fields never show errors
/// assert!(form.errors().is_empty());
/// assert!(!form.is_valid());
///
/// form.set_field_touched("email");
/// assert_eq!(form.errors().message("email"), Some("Email is required"));
///
/// form.set_field_value("email", "ada@example.com");
/// assert!(form.errors().is_empty());
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
	schema: FormSchema,
	values: FieldValues,
	touched: IndexSet<String>,
	errors: ValidationErrors,
	pending: bool,
	form_error: Option<String>,
}

impl FormController {
	pub fn new(schema: FormSchema) -> Self {
		let values = schema.initial_values();
		let errors = validation::validate(&schema, &values);
		Self {
			schema,
			values,
			touched: IndexSet::new(),
			errors,
			pending: false,
			form_error: None,
		}
	}

	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	pub fn values(&self) -> &FieldValues {
		&self.values
	}

	/// Current value of `field`, empty when the schema has no such field
	pub fn value(&self, field: &str) -> &str {
		self.values.get(field).map(String::as_str).unwrap_or("")
	}

	/// Updates one field and re-validates the whole form.
	///
	/// Names outside the schema are ignored.
	pub fn set_field_value(&mut self, field: &str, value: impl Into<String>) {
		let Some(slot) = self.values.get_mut(field) else {
			tracing::debug!(field = %field, "ignoring value for unknown field");
			return;
		};
		*slot = value.into();
		self.revalidate();
	}

	pub fn set_field_touched(&mut self, field: &str) {
		if self.schema.contains(field) {
			self.touched.insert(field.to_string());
		}
	}

	pub fn is_touched(&self, field: &str) -> bool {
		self.touched.contains(field)
	}

	/// Errors of touched fields only
	pub fn errors(&self) -> ValidationErrors {
		let mut visible = self.errors.clone();
		visible.retain(|field| self.touched.contains(field));
		visible
	}

	/// Full validation result, regardless of touched state
	pub fn all_errors(&self) -> &ValidationErrors {
		&self.errors
	}

	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}

	pub fn form_error(&self) -> Option<&str> {
		self.form_error.as_deref()
	}

	/// Starts a submission attempt.
	///
	/// Clears the previous form-level error, marks every field touched so
	/// all errors become visible, and re-validates. On success the pending
	/// flag is set and a snapshot of the current values is returned.
	pub fn begin_submit(&mut self) -> Result<FormSnapshot, SubmitRejected> {
		if self.pending {
			return Err(SubmitRejected::Pending);
		}

		self.form_error = None;
		self.touched
			.extend(self.schema.field_names().map(str::to_string));
		self.revalidate();

		if !self.errors.is_empty() {
			return Err(SubmitRejected::Invalid);
		}

		self.pending = true;
		Ok(FormSnapshot::new(self.values.clone()))
	}

	/// Applies the outcome of a submission started with [`begin_submit`].
	///
	/// [`begin_submit`]: FormController::begin_submit
	pub fn finish_submit<T>(&mut self, result: &SubmissionResult<T>) {
		self.pending = false;
		if let SubmissionResult::Failure(reason) = result {
			self.form_error = Some(reason.clone());
		}
	}

	/// Ends a submission that never produced a result.
	///
	/// Only the pending flag is cleared; values, touched fields and the
	/// form-level error are left as they are.
	pub fn abandon_submit(&mut self) {
		self.pending = false;
	}

	/// Back to initial values with nothing touched
	pub fn reset(&mut self) {
		self.values = self.schema.initial_values();
		self.touched.clear();
		self.pending = false;
		self.form_error = None;
		self.revalidate();
	}

	fn revalidate(&mut self) {
		self.errors = validation::validate(&self.schema, &self.values);
	}
}
