//! # Byline Core
//!
//! The domain layer of the Byline publishing backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod manager;
pub mod ports;
pub mod validate;

pub use error::{DomainError, ValidationError, ValidationKind};
