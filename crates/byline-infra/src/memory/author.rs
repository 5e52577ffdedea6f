use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use byline_core::domain::Author;
use byline_core::error::RepoError;
use byline_core::ports::{AuthorRepository, BaseRepository};

/// In-memory author store using a HashMap behind an async RwLock.
///
/// Enforces the same unique constraint on `name` that the Postgres schema
/// carries, so the constraint backstop is observable without a database.
/// Note: Data is lost on process restart.
pub struct InMemoryAuthorRepository {
    store: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, entity: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        // Unique index stand-in: reject a name held by any other author.
        let taken = store
            .values()
            .any(|a| a.name == entity.name && a.id != entity.id);
        if taken {
            return Err(RepoError::Constraint(
                "duplicate key value violates unique index on authors.name".to_string(),
            ));
        }

        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|a| a.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}
