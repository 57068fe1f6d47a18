//! # staffdesk
//!
//! Form validation and submission pipeline for a small staff-management
//! app: an employee intake form, sign-in and sign-up.
//!
//! ## Feature Flags
//!
//! - `auth` - Authentication and document-store collaborators with in-memory backends
//! - `conf` - Backend settings read from `STAFFDESK_BACKEND_*` environment variables
//! - `pages` (default) - Submission handlers, navigation and app wiring; enables `auth` and `conf`
//!
//! The validation engine and form controller (`forms`) are always available.
//!
//! ## Quick Start
//!
//! ```
//! use staffdesk::prelude::*;
//!
//! let mut form = FormController::new(schemas::sign_in());
//! form.set_field_value("email", "ada@example.com");
//! form.set_field_touched("password");
//!
//! assert_eq!(form.errors().message("password"), Some("Password is required"));
//! ```

pub use staffdesk_forms as forms;

#[cfg(feature = "auth")]
pub use staffdesk_auth as auth;

#[cfg(feature = "conf")]
pub use staffdesk_conf as conf;

#[cfg(feature = "pages")]
pub use staffdesk_pages as pages;

/// Commonly used types
pub mod prelude {
	pub use staffdesk_forms::{
		ErrorKind, FieldError, FieldRule, FieldValues, FormController, FormHandle, FormSchema,
		FormSnapshot, MountState, SubmissionHandler, SubmissionResult, SubmitOutcome, ValidationErrors,
		schemas, validate,
	};

	#[cfg(feature = "auth")]
	pub use staffdesk_auth::{
		Account, AuthBackend, AuthError, Document, DocumentStore, InMemoryAuthBackend,
		InMemoryDocumentStore, Session,
	};

	#[cfg(feature = "conf")]
	pub use staffdesk_conf::{BackendSettings, Env, EnvError};

	#[cfg(feature = "pages")]
	pub use staffdesk_pages::{
		App, CurrentSession, Dashboard, ErrorSink, Home, NavigationError, Navigator, ScreenId,
		SignUpPhase, StackNavigator,
	};
}
