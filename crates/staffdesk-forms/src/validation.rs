//! Validation engine
//!
//! [`validate`] is a pure function of a schema and a set of values. It
//! keeps no state between calls, so calling it twice with the same inputs
//! yields the same mapping.

use crate::error::ValidationErrors;
use crate::schema::FormSchema;
use crate::values::FieldValues;

/// Validate `values` against `schema`.
///
/// Every schema field is checked; a field missing from `values` is treated
/// as an empty string and values for unknown fields are ignored. Each field
/// gets at most one error, the first rule that fails.
///
/// # Examples
///
/// ```
/// use staffdesk_forms::{FieldRule, FieldValues, FormSchema, validate};
///
/// let schema = FormSchema::new()
///     .with_field("phone", FieldRule::new()
///         .required("Phone number is required")
///         .with_pattern("[0-9]{10}", "Phone number must be 10 digits")
///         .unwrap());
///
/// let mut values = FieldValues::new();
/// values.insert("phone".to_string(), "12345".to_string());
/// values.insert("nickname".to_string(), "ignored".to_string());
///
/// let errors = validate(&schema, &values);
/// assert_eq!(errors.message("phone"), Some("Phone number must be 10 digits"));
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate(schema: &FormSchema, values: &FieldValues) -> ValidationErrors {
	let mut errors = ValidationErrors::new();

	for (name, rule) in schema.fields() {
		let value = values.get(name).map(String::as_str).unwrap_or("");
		if let Some(error) = rule.check(value, values) {
			errors.insert(name, error);
		}
	}

	errors
}
