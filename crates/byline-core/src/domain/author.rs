use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author entity - a writer who owns zero or more posts.
///
/// The post collection is not held in memory; it is navigated through
/// `PostRepository::find_by_author_id`, so neither side of the relationship
/// owns the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with generated ID and timestamps.
    pub fn new(name: String, phone_number: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        }
    }
}
