//! # Byline Infrastructure
//!
//! Concrete implementations of the ports defined in `byline-core`.
//! This crate contains the database repositories and their in-memory
//! counterparts.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
