//! Document-store collaborator

use crate::error::StoreResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single document field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentValue {
	/// Serialized as an RFC 3339 string
	Timestamp(DateTime<Utc>),
	Text(String),
}

impl From<&str> for DocumentValue {
	fn from(value: &str) -> Self {
		DocumentValue::Text(value.to_string())
	}
}

impl From<String> for DocumentValue {
	fn from(value: String) -> Self {
		DocumentValue::Text(value)
	}
}

impl From<DateTime<Utc>> for DocumentValue {
	fn from(value: DateTime<Utc>) -> Self {
		DocumentValue::Timestamp(value)
	}
}

/// Ordered key/value document
///
/// # Examples
///
/// ```
/// use staffdesk_auth::Document;
///
/// let doc = Document::new()
///     .with("fullName", "Ada Lovelace")
///     .with("email", "ada@example.com");
///
/// assert_eq!(doc.text("fullName"), Some("Ada Lovelace"));
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
	fields: IndexMap<String, DocumentValue>,
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<DocumentValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DocumentValue>) {
		self.fields.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&DocumentValue> {
		self.fields.get(key)
	}

	pub fn text(&self, key: &str) -> Option<&str> {
		match self.fields.get(key) {
			Some(DocumentValue::Text(text)) => Some(text),
			_ => None,
		}
	}

	pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
		match self.fields.get(key) {
			Some(DocumentValue::Timestamp(at)) => Some(*at),
			_ => None,
		}
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentValue)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}
}

/// Remote document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
	/// Create or overwrite `collection/id`
	async fn write_document(&self, collection: &str, id: &str, document: Document) -> StoreResult<()>;
}
