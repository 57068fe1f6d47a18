//! # staffdesk auth
//!
//! Collaborator traits for the external authentication provider and
//! document database, plus in-memory implementations.
//!
//! ## Architecture
//!
//! - [`backend`]: [`AuthBackend`] with [`Session`] and [`Account`]
//! - [`store`]: [`DocumentStore`] with [`Document`] and [`DocumentValue`]
//! - [`hasher`]: [`PasswordHasher`] and the salted SHA-256 implementation
//! - [`memory`]: [`InMemoryAuthBackend`] and [`InMemoryDocumentStore`]

pub mod backend;
pub mod error;
pub mod hasher;
pub mod memory;
pub mod store;

pub use backend::{Account, AuthBackend, Session};
pub use error::{AuthError, AuthResult, StoreError, StoreResult, codes};
pub use hasher::{PasswordHasher, SaltedSha256Hasher};
pub use memory::{ErrorMode, InMemoryAuthBackend, InMemoryDocumentStore, MIN_PASSWORD_LENGTH};
pub use store::{Document, DocumentStore, DocumentValue};
