use crate::domain::{
    interaction::{
        comment::{Comment, CommentView},
        rating::{Rating, RatingScore},
        repository::InteractionRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxInteractionRepository {
    pub pool: PgPool,
}

impl SqlxInteractionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for SqlxInteractionRepository {
    async fn toggle_like(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        // Delete-first toggle: the unique index on (recipe_id, user_id) plus
        // ON CONFLICT DO NOTHING makes concurrent toggles on the same pair
        // degrade to idempotent no-ops instead of duplicating rows.
        let deleted = sqlx::query(
            "DELETE FROM recipe_likes WHERE recipe_id = $1 AND user_id = $2",
        )
        .bind(recipe_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if deleted > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO recipe_likes (id, recipe_id, user_id) VALUES ($1, $2, $3)
             ON CONFLICT (recipe_id, user_id) DO NOTHING",
        )
        .bind(Uuid::now_v7())
        .bind(recipe_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(true)
    }

    async fn has_liked(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        // fetch_optional separates "no row" (not liked) from a query failure.
        let row = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM recipe_likes WHERE recipe_id = $1 AND user_id = $2",
        )
        .bind(recipe_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn likes_count(&self, recipe_id: Uuid) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM recipe_likes WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn upsert_rating(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        score: RatingScore,
    ) -> Result<Rating, DomainError> {
        let rating = sqlx::query_as::<_, Rating>(
            "INSERT INTO recipe_ratings (id, recipe_id, user_id, rating)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (recipe_id, user_id)
             DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
             RETURNING id, recipe_id, user_id, rating, created_at, updated_at",
        )
        .bind(Uuid::now_v7())
        .bind(recipe_id)
        .bind(user_id)
        .bind(score.value())
        .fetch_one(&self.pool)
        .await?;
        Ok(rating)
    }

    async fn rating_values(&self, recipe_id: Uuid) -> Result<Vec<i32>, DomainError> {
        let values = sqlx::query_scalar::<_, i32>(
            "SELECT rating FROM recipe_ratings WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(values)
    }

    async fn add_comment(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        body: String,
    ) -> Result<Comment, DomainError> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO recipe_comments (id, recipe_id, user_id, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING id, recipe_id, user_id, comment, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(recipe_id)
        .bind(user_id)
        .bind(&body)
        .fetch_one(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn list_comments(&self, recipe_id: Uuid) -> Result<Vec<CommentView>, DomainError> {
        // LEFT JOIN with a COALESCE'd username: a missing profile row yields
        // the placeholder instead of dropping the comment or failing the list.
        let rows = sqlx::query_as::<_, CommentView>(
            "SELECT c.id, c.comment, c.created_at,
                    COALESCE(u.username, 'Unknown User') AS username,
                    c.user_id
             FROM recipe_comments c
             LEFT JOIN users u ON u.id = c.user_id
             WHERE c.recipe_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn comments_count(&self, recipe_id: Uuid) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM recipe_comments WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
