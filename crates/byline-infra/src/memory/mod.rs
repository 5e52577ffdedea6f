//! In-memory repositories - used as test doubles and as a fallback backend
//! when no database is configured.

mod author;
mod post;

pub use author::InMemoryAuthorRepository;
pub use post::InMemoryPostRepository;

#[cfg(test)]
mod tests;
