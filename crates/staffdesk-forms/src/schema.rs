//! Ordered field-name to rule mapping

use crate::error::ValidationErrors;
use crate::rule::FieldRule;
use crate::validation;
use crate::values::FieldValues;
use indexmap::IndexMap;

/// A form's rule set, in display order.
///
/// Field names are unique: adding a name that is already present replaces
/// its rule but keeps its position.
///
/// # Examples
///
/// ```
/// use staffdesk_forms::{FieldRule, FormSchema};
///
/// let schema = FormSchema::new()
///     .with_field("email", FieldRule::new().required("Email is required"))
///     .with_field("password", FieldRule::new())
///     .with_field("email", FieldRule::new());
///
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["email", "password"]);
/// assert!(!schema.get("email").unwrap().is_required());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
	fields: IndexMap<String, FieldRule>,
}

impl FormSchema {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
		self.add_field(name, rule);
		self
	}

	pub fn add_field(&mut self, name: impl Into<String>, rule: FieldRule) {
		self.fields.insert(name.into(), rule);
	}

	pub fn get(&self, name: &str) -> Option<&FieldRule> {
		self.fields.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// An empty value for every field in the schema
	pub fn initial_values(&self) -> FieldValues {
		self.fields
			.keys()
			.map(|name| (name.clone(), String::new()))
			.collect()
	}

	/// Shorthand for [`validation::validate`]
	pub fn validate(&self, values: &FieldValues) -> ValidationErrors {
		validation::validate(self, values)
	}
}
