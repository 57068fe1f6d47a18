//! Field values and submission snapshots

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current value of each field, keyed by field name.
///
/// Values stay strings until submission; numeric and phone fields are
/// parsed by the submission handler.
pub type FieldValues = IndexMap<String, String>;

/// Immutable copy of the form values handed to a submission handler.
///
/// Later edits to the form do not reach a snapshot that was already taken.
///
/// # Examples
///
/// ```
/// use staffdesk_forms::{FieldValues, FormSnapshot};
///
/// let mut values = FieldValues::new();
/// values.insert("email".to_string(), "ada@example.com".to_string());
///
/// let snapshot = FormSnapshot::new(values.clone());
/// values.insert("email".to_string(), "changed@example.com".to_string());
///
/// assert_eq!(snapshot.get("email"), "ada@example.com");
/// assert_eq!(snapshot.get("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
	values: FieldValues,
}

impl FormSnapshot {
	pub fn new(values: FieldValues) -> Self {
		Self { values }
	}

	/// Value of `field`, or an empty string when the form has no such field
	pub fn get(&self, field: &str) -> &str {
		self.values.get(field).map(String::as_str).unwrap_or("")
	}

	/// Trimmed value of `field`
	pub fn trimmed(&self, field: &str) -> &str {
		self.get(field).trim()
	}

	pub fn values(&self) -> &FieldValues {
		&self.values
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<FieldValues> for FormSnapshot {
	fn from(values: FieldValues) -> Self {
		Self::new(values)
	}
}
