use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{BaseRepository, PostRepository};
use crate::validate;

/// Fields for creating a post. The category arrives as the raw transport
/// string so an absent or misspelled value fails the enumeration check rather
/// than the request parser.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<Uuid>,
}

/// Partial update for a post. An outer `None` leaves the field unchanged;
/// `summary: Some(None)` and `author_id: Some(None)` clear those fields.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
    pub author_id: Option<Option<Uuid>>,
}

/// Post entity manager - enforces title, content, summary, and category rules
/// before any write. The `author_id` link is passed through unvalidated; the
/// storage layer's foreign key owns referential integrity.
pub struct PostManager<R> {
    repo: Arc<R>,
}

impl<R> PostManager<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new post.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        validate::post_title(&input.title)?;
        validate::post_content(&input.content)?;
        validate::post_summary(input.summary.as_deref())?;
        let category = validate::category(input.category.as_deref())?;

        let post = Post::new(
            input.title,
            input.content,
            input.summary,
            category,
            input.author_id,
        );
        Ok(self.repo.save(post).await?)
    }

    /// Validate and persist changes to an existing post.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;

        if let Some(title) = patch.title {
            validate::post_title(&title)?;
            post.title = title;
        }

        if let Some(content) = patch.content {
            validate::post_content(&content)?;
            post.content = content;
        }

        if let Some(summary) = patch.summary {
            validate::post_summary(summary.as_deref())?;
            post.summary = summary;
        }

        if let Some(category) = patch.category {
            post.category = validate::category(Some(&category))?;
        }

        if let Some(author_id) = patch.author_id {
            post.author_id = author_id;
        }

        post.updated_at = Utc::now();
        Ok(self.repo.save(post).await?)
    }
}
