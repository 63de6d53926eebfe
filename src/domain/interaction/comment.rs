use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable comment on a recipe. There is no edit or delete path;
/// rows disappear only when the recipe itself is removed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection of a comment joined with the author's username.
///
/// Comments outlive their author: a deleted account leaves `user_id` NULL and
/// `username` falls back to "Unknown User", so one missing profile never
/// aborts a whole listing.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentView {
    pub id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub user_id: Option<Uuid>,
}
