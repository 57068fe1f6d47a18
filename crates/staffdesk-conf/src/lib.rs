//! Configuration for staffdesk
//!
//! Backend connection parameters come from environment variables, by
//! default prefixed with `STAFFDESK_BACKEND_`:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `STAFFDESK_BACKEND_API_KEY` | `api_key` |
//! | `STAFFDESK_BACKEND_AUTH_DOMAIN` | `auth_domain` |
//! | `STAFFDESK_BACKEND_PROJECT_ID` | `project_id` |
//! | `STAFFDESK_BACKEND_STORAGE_BUCKET` | `storage_bucket` |
//! | `STAFFDESK_BACKEND_MESSAGING_SENDER_ID` | `messaging_sender_id` |
//! | `STAFFDESK_BACKEND_APP_ID` | `app_id` |

pub mod env;
pub mod settings;

pub use env::{DEFAULT_PREFIX, Env, EnvError, validate_env_var_name};
pub use settings::BackendSettings;
