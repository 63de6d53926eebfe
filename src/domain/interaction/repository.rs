use super::super::shared::errors::DomainError;
use super::comment::{Comment, CommentView};
use super::rating::{Rating, RatingScore};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Flips the like state for the (recipe, user) pair and returns the new
    /// state. Implementations must be safe against concurrent toggles on the
    /// same pair (store-level uniqueness, conflict as no-op).
    async fn toggle_like(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;
    async fn has_liked(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;
    async fn likes_count(&self, recipe_id: Uuid) -> Result<i64, DomainError>;

    /// Atomic insert-or-replace keyed on (recipe_id, user_id).
    async fn upsert_rating(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        score: RatingScore,
    ) -> Result<Rating, DomainError>;
    async fn rating_values(&self, recipe_id: Uuid) -> Result<Vec<i32>, DomainError>;

    async fn add_comment(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        body: String,
    ) -> Result<Comment, DomainError>;
    async fn list_comments(&self, recipe_id: Uuid) -> Result<Vec<CommentView>, DomainError>;
    async fn comments_count(&self, recipe_id: Uuid) -> Result<i64, DomainError>;
}
