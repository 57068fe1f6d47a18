//! Screens for staffdesk
//!
//! Wires the form pipeline from `staffdesk-forms` to the authentication,
//! document-store and navigation collaborators.
//!
//! ## Architecture
//!
//! - [`handlers`]: employee intake, sign-in and sign-up submission handlers
//! - [`navigation`]: [`Navigator`] and the in-memory [`StackNavigator`]
//! - [`report`]: [`ErrorSink`] for failures of best-effort work
//! - [`screens`]: [`Home`] and [`Dashboard`]
//! - [`app`]: [`App`], which owns the shared collaborators and mounts screens

pub mod app;
pub mod handlers;
pub mod navigation;
pub mod report;
pub mod screens;
pub mod session;

pub use app::{App, EmployeeForm, SignInForm, SignUpForm};
pub use handlers::{
	EmployeeConfirmation, EmployeeIntakeHandler, EmployeeRecord, SignInHandler, SignUpHandler,
	SignUpPhase,
};
pub use navigation::{NavigationError, Navigator, ScreenId, StackNavigator};
pub use report::{ErrorReport, ErrorSink, RecordingErrorSink, TracingErrorSink};
pub use screens::{Dashboard, Home};
pub use session::CurrentSession;
