//! Data Transfer Objects - flat payload types for committed entities.
//!
//! The Author↔Post relationship is navigable in both directions, so a naive
//! recursive serializer would expand author→posts→author forever. These types
//! cut the cycle structurally: the nested variants embed only the flat
//! representation of the other side, one level deep.

use serde::{Deserialize, Serialize};

use byline_core::domain::{Author, Post};

/// An author without its post collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name,
            phone_number: author.phone_number,
            created_at: author.created_at.to_rfc3339(),
            updated_at: author.updated_at.to_rfc3339(),
        }
    }
}

/// A post without its author expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            summary: post.summary,
            category: post.category.as_str().to_string(),
            author_id: post.author_id.map(|id| id.to_string()),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

/// An author with its owned posts, each flat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorWithPosts {
    #[serde(flatten)]
    pub author: AuthorResponse,
    pub posts: Vec<PostResponse>,
}

impl AuthorWithPosts {
    pub fn new(author: Author, posts: Vec<Post>) -> Self {
        Self {
            author: author.into(),
            posts: posts.into_iter().map(Into::into).collect(),
        }
    }
}

/// A post with its author, flat, when it has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: PostResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
}

impl PostWithAuthor {
    pub fn new(post: Post, author: Option<Author>) -> Self {
        Self {
            post: post.into(),
            author: author.map(Into::into),
        }
    }
}
