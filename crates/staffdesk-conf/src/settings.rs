//! Backend connection settings

use crate::env::{Env, EnvError};
use serde::Deserialize;
use std::fmt;

/// Connection parameters for the authentication / document-store service.
///
/// All values are opaque strings handed to the provider unchanged.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BackendSettings {
	pub api_key: String,
	pub auth_domain: String,
	pub project_id: String,
	pub storage_bucket: String,
	pub messaging_sender_id: String,
	pub app_id: String,
}

impl BackendSettings {
	/// Variable names read by [`BackendSettings::from_env`], without prefix
	pub const KEYS: [&'static str; 6] = [
		"API_KEY",
		"AUTH_DOMAIN",
		"PROJECT_ID",
		"STORAGE_BUCKET",
		"MESSAGING_SENDER_ID",
		"APP_ID",
	];

	/// Load every setting from `env`; the first missing variable is an error.
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_conf::{BackendSettings, Env, EnvError};
	///
	/// let env = Env::new().with_prefix("STAFFDESK_DOCTEST_UNSET_");
	/// let err = BackendSettings::from_env(&env).unwrap_err();
	/// assert_eq!(err, EnvError::MissingVariable("STAFFDESK_DOCTEST_UNSET_API_KEY".to_string()));
	/// ```
	pub fn from_env(env: &Env) -> Result<Self, EnvError> {
		let settings = Self {
			api_key: env.str("API_KEY")?,
			auth_domain: env.str("AUTH_DOMAIN")?,
			project_id: env.str("PROJECT_ID")?,
			storage_bucket: env.str("STORAGE_BUCKET")?,
			messaging_sender_id: env.str("MESSAGING_SENDER_ID")?,
			app_id: env.str("APP_ID")?,
		};
		tracing::debug!(project_id = %settings.project_id, "loaded backend settings");
		Ok(settings)
	}

	/// Load from the default `STAFFDESK_BACKEND_` prefix
	pub fn from_default_env() -> Result<Self, EnvError> {
		Self::from_env(&Env::backend())
	}
}

impl fmt::Debug for BackendSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BackendSettings")
			.field("api_key", &"[REDACTED]")
			.field("auth_domain", &self.auth_domain)
			.field("project_id", &self.project_id)
			.field("storage_bucket", &self.storage_bucket)
			.field("messaging_sender_id", &self.messaging_sender_id)
			.field("app_id", &self.app_id)
			.finish()
	}
}
