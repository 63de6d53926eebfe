//! The interaction core: like toggle, rating upsert, comment append and the
//! aggregated stats read.
//!
//! Mutating operations verify the referenced recipe exists before touching any
//! interaction row. The stats read deliberately performs no existence check: a
//! recipe without interaction rows and an unknown id both produce an all-zeros
//! summary.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    interaction::{
        comment::{Comment, CommentView},
        rating::{Rating, RatingScore},
        repository::InteractionRepository,
        summary::{InteractionSummary, RatingSummary},
    },
    recipe::repository::RecipeRepository,
    shared::errors::DomainError,
};

/// Like status for a specific requesting user.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeStatus {
    pub liked: bool,
    pub likes_count: i64,
}

#[derive(Clone)]
pub struct InteractionService {
    recipes: Arc<dyn RecipeRepository>,
    interactions: Arc<dyn InteractionRepository>,
}

impl InteractionService {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        interactions: Arc<dyn InteractionRepository>,
    ) -> Self {
        Self {
            recipes,
            interactions,
        }
    }

    async fn ensure_recipe_exists(&self, recipe_id: Uuid) -> Result<(), DomainError> {
        if self.recipes.exists(recipe_id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound("Recipe not found".to_string()))
        }
    }

    /// Flips the caller's like on a recipe, returning the new state.
    pub async fn toggle_like(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        self.ensure_recipe_exists(recipe_id).await?;
        let liked = self.interactions.toggle_like(recipe_id, user_id).await?;
        tracing::debug!(%recipe_id, %user_id, liked, "like toggled");
        Ok(liked)
    }

    /// Records or replaces the caller's 1..=5 rating of a recipe.
    pub async fn set_rating(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        rating: i32,
    ) -> Result<Rating, DomainError> {
        self.ensure_recipe_exists(recipe_id).await?;
        let score = RatingScore::new(rating)?;
        self.interactions
            .upsert_rating(recipe_id, user_id, score)
            .await
    }

    /// Appends an immutable comment attributed to the already-verified caller.
    pub async fn add_comment(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        body: String,
    ) -> Result<Comment, DomainError> {
        self.ensure_recipe_exists(recipe_id).await?;
        self.interactions.add_comment(recipe_id, user_id, body).await
    }

    /// Assembles the interaction summary for a recipe.
    ///
    /// The three sub-queries are independent and issued concurrently; a
    /// failure in any of them fails the whole call.
    pub async fn get_stats(&self, recipe_id: Uuid) -> Result<InteractionSummary, DomainError> {
        let (likes_count, rating_values, comments_count) = tokio::try_join!(
            self.interactions.likes_count(recipe_id),
            self.interactions.rating_values(recipe_id),
            self.interactions.comments_count(recipe_id),
        )?;

        Ok(InteractionSummary {
            likes_count,
            rating: RatingSummary::from_values(&rating_values),
            comments_count,
        })
    }

    /// Whether the given user has liked the recipe, plus the current count.
    ///
    /// An absent like row is a normal outcome (`liked: false`); only genuine
    /// query failures propagate as errors.
    pub async fn like_status(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<LikeStatus, DomainError> {
        let (liked, likes_count) = tokio::try_join!(
            self.interactions.has_liked(recipe_id, user_id),
            self.interactions.likes_count(recipe_id),
        )?;
        Ok(LikeStatus { liked, likes_count })
    }

    pub async fn list_comments(&self, recipe_id: Uuid) -> Result<Vec<CommentView>, DomainError> {
        self.interactions.list_comments(recipe_id).await
    }
}
