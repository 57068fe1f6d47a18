//! Form validation and submission for staffdesk
//!
//! This crate provides:
//! - Declarative field rules ([`FieldRule`]) collected into a [`FormSchema`]
//! - A pure validation engine ([`validate`])
//! - Per-screen form state with touched tracking ([`FormController`])
//! - An async handle that runs a [`SubmissionHandler`] without blocking input ([`FormHandle`])
//! - The built-in employee, sign-in and sign-up schemas ([`schemas`])

pub mod controller;
pub mod error;
pub mod handle;
pub mod handler;
pub mod rule;
pub mod schema;
pub mod schemas;
pub mod validation;
pub mod values;

pub use controller::{FormController, SubmitRejected};
pub use error::{ErrorKind, FieldError, FormsError, FormsResult, ValidationErrors};
pub use handle::{FormHandle, MountState, SubmitOutcome};
pub use handler::{SubmissionHandler, SubmissionResult};
pub use rule::{FieldMatch, FieldRule, FullPattern, LengthBound, NumberCheck, PatternCheck};
pub use schema::FormSchema;
pub use validation::validate;
pub use values::{FieldValues, FormSnapshot};
