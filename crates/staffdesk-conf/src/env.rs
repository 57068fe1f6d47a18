//! Environment variable handling
//!
//! Reads string settings from prefixed environment variables.

use std::env;

/// Prefix used for backend settings when none is given
pub const DEFAULT_PREFIX: &str = "STAFFDESK_BACKEND_";

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "STAFFDESK_BACKEND_")
	pub prefix: Option<String>,
}

impl Env {
	/// Create a reader without a prefix
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Create a reader using [`DEFAULT_PREFIX`]
	pub fn backend() -> Self {
		Self::new().with_prefix(DEFAULT_PREFIX)
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value from environment
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	/// Read a string value with a default
	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		let full_key = self.key_name(key);
		validate_env_var_name(&full_key)?;

		match env::var(&full_key) {
			Ok(val) => Ok(val),
			Err(env::VarError::NotUnicode(raw)) => Err(EnvError::NotUnicode {
				key: full_key,
				value_len: raw.len(),
			}),
			Err(env::VarError::NotPresent) => match default {
				Some(d) => Ok(d.to_string()),
				None => Err(EnvError::MissingVariable(full_key)),
			},
		}
	}

	/// Read a string value, `None` when the variable is not set
	pub fn optional(&self, key: &str) -> Result<Option<String>, EnvError> {
		match self.str(key) {
			Ok(val) => Ok(Some(val)),
			Err(EnvError::MissingVariable(_)) => Ok(None),
			Err(e) => Err(e),
		}
	}
}

/// Checks a full variable name before it is looked up.
///
/// `std::env::var` reports names that are empty or contain `=` or NUL as
/// simply unset, which would surface as a misleading missing-setting
/// error. Any control character is refused along with `=`.
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	let reason = if name.is_empty() {
		"name is empty".to_string()
	} else if let Some((pos, c)) = name.char_indices().find(|&(_, c)| c == '=' || c.is_control()) {
		format!("{:?} at byte {} is not allowed", c, pos)
	} else {
		return Ok(());
	};

	Err(EnvError::InvalidKey {
		name: name.escape_debug().to_string(),
		reason,
	})
}

/// Errors reading backend settings from the environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	/// The variable is set but its value is not UTF-8. Only the length of
	/// the raw value is kept, since settings may hold secrets.
	#[error("Environment variable '{key}' is not valid unicode ({value_len} bytes)")]
	NotUnicode { key: String, value_len: usize },

	#[error("Invalid environment variable name \"{name}\": {reason}")]
	InvalidKey { name: String, reason: String },
}
