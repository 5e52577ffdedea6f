//! Entity managers - validation gate in front of storage.
//!
//! One manager per entity type. A manager runs every changed field through its
//! validator and only then hands the entity to the repository, so a rejected
//! write never reaches storage. Repositories are injected at construction;
//! there is no ambient global storage handle.

mod author;
mod post;

pub use author::{AuthorManager, AuthorPatch, NewAuthor};
pub use post::{NewPost, PostManager, PostPatch};
