use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update), atomically.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with domain-specific methods.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find an author by exact, case-sensitive name match.
    ///
    /// Backs the uniqueness pre-check; storage must additionally enforce a
    /// unique index on the name column as the hard backstop against
    /// concurrent writers.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;

    /// List all authors.
    async fn find_all(&self) -> Result<Vec<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts owned by the given author. This is the forward direction of
    /// the Author→Post relationship; the reverse is `Post::author_id`.
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;
}
