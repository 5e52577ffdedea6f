//! # Byline Shared
//!
//! Transport-facing representations of the domain entities, shared between
//! the backend and any client of it.

pub mod dto;

pub use dto::{AuthorResponse, AuthorWithPosts, PostResponse, PostWithAuthor};
