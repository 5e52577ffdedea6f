use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::Author;
use crate::error::{DomainError, ValidationError, ValidationKind};
use crate::ports::{AuthorRepository, BaseRepository};
use crate::validate;

/// Fields for creating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub phone_number: Option<String>,
}

/// Partial update for an author. An outer `None` leaves the field unchanged;
/// `phone_number: Some(None)` clears the phone number.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

/// Author entity manager - enforces name and phone rules before any write.
pub struct AuthorManager<R> {
    repo: Arc<R>,
}

impl<R> AuthorManager<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new author.
    pub async fn create(&self, input: NewAuthor) -> Result<Author, DomainError> {
        validate::author_name(&input.name)?;
        validate::phone_number(input.phone_number.as_deref())?;
        self.ensure_name_available(&input.name, None).await?;

        let author = Author::new(input.name, input.phone_number);
        Ok(self.repo.save(author).await?)
    }

    /// Validate and persist changes to an existing author.
    pub async fn update(&self, id: Uuid, patch: AuthorPatch) -> Result<Author, DomainError> {
        let mut author =
            self.repo
                .find_by_id(id)
                .await?
                .ok_or(DomainError::NotFound {
                    entity_type: "Author",
                    id,
                })?;

        if let Some(name) = patch.name {
            validate::author_name(&name)?;
            // Excluding our own id lets re-saving an unchanged name succeed.
            self.ensure_name_available(&name, Some(id)).await?;
            author.name = name;
        }

        if let Some(phone_number) = patch.phone_number {
            validate::phone_number(phone_number.as_deref())?;
            author.phone_number = phone_number;
        }

        author.updated_at = Utc::now();
        Ok(self.repo.save(author).await?)
    }

    /// Uniqueness pre-check against storage.
    ///
    /// This is a read-then-write window under concurrent writers; it exists
    /// for the friendlier typed error. The unique index on the name column is
    /// the hard enforcement, and a loss in that race surfaces as
    /// `RepoError::Constraint`.
    async fn ensure_name_available(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<(), DomainError> {
        if let Some(existing) = self.repo.find_by_name(name).await? {
            if Some(existing.id) != exclude_id {
                return Err(ValidationError::new(
                    ValidationKind::DuplicateName,
                    "Author name must be unique.",
                )
                .into());
            }
        }
        Ok(())
    }
}
