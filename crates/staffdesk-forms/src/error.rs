//! Error types for schema construction and field validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised while building a form schema
#[derive(Debug, thiserror::Error)]
pub enum FormsError {
	#[error("Invalid pattern: {0}")]
	Pattern(#[from] regex::Error),
}

pub type FormsResult<T> = Result<T, FormsError>;

/// The rule that produced a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	Required,
	MinLength,
	MaxLength,
	Pattern,
	NotANumber,
	NotPositive,
	Mismatch,
}

/// A validation failure attached to one named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	pub kind: ErrorKind,
	pub message: String,
}

impl FieldError {
	pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// Field name to error mapping, in schema order.
///
/// A field missing from the mapping is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
	errors: IndexMap<String, FieldError>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn insert(&mut self, field: impl Into<String>, error: FieldError) {
		self.errors.insert(field.into(), error);
	}

	/// Returns the error message for `field`, if any
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::{FieldRule, FormSchema, FieldValues, validate};
	///
	/// let schema = FormSchema::new()
	///     .with_field("email", FieldRule::new().required("Email is required"));
	///
	/// let errors = validate(&schema, &FieldValues::new());
	/// assert_eq!(errors.message("email"), Some("Email is required"));
	/// assert_eq!(errors.message("other"), None);
	/// ```
	pub fn message(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(|e| e.message.as_str())
	}

	pub fn get(&self, field: &str) -> Option<&FieldError> {
		self.errors.get(field)
	}

	pub fn kind(&self, field: &str) -> Option<ErrorKind> {
		self.errors.get(field).map(|e| e.kind)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.errors.contains_key(field)
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.errors.keys().map(String::as_str)
	}

	/// Keeps only the entries whose field name satisfies `keep`
	pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
		self.errors.retain(|name, _| keep(name));
	}
}
