use crate::domain::{
    recipe::{
        entity::{Ingredient, Instruction, NewRecipe, Recipe, RecipeCard},
        repository::RecipeRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Card projection shared by the browse, search and profile listings:
/// recipe columns joined with the author's username and the like count.
const CARD_SELECT: &str = "SELECT r.id, r.user_id, r.title, r.description, r.image_url,
        r.prep_time, r.cook_time, r.servings, r.difficulty, r.created_at,
        u.username,
        COUNT(l.id) AS likes_count
 FROM recipes r
 LEFT JOIN users u ON u.id = r.user_id
 LEFT JOIN recipe_likes l ON l.recipe_id = r.id";

const CARD_GROUP_ORDER: &str = " GROUP BY r.id, u.username ORDER BY r.created_at DESC";

pub struct SqlxRecipeRepository {
    pub pool: PgPool,
}

impl SqlxRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for SqlxRecipeRepository {
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError> {
        let created = sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (id, user_id, title, description, image_url,
                                  prep_time, cook_time, servings, difficulty)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, user_id, title, description, image_url,
                       prep_time, cook_time, servings, difficulty,
                       created_at, updated_at",
        )
        .bind(Uuid::now_v7())
        .bind(recipe.user_id)
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.image_url)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.servings)
        .bind(recipe.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "SELECT id, user_id, title, description, image_url,
                    prep_time, cook_time, servings, difficulty,
                    created_at, updated_at
             FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        // Interaction rows, ingredients and instructions cascade.
        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_cards(&self) -> Result<Vec<RecipeCard>, DomainError> {
        let cards = sqlx::query_as::<_, RecipeCard>(&format!("{CARD_SELECT}{CARD_GROUP_ORDER}"))
            .fetch_all(&self.pool)
            .await?;
        Ok(cards)
    }

    async fn search_cards(&self, query: &str) -> Result<Vec<RecipeCard>, DomainError> {
        let pattern = format!("%{}%", query);
        let cards = sqlx::query_as::<_, RecipeCard>(&format!(
            "{CARD_SELECT} WHERE r.title ILIKE $1 OR r.description ILIKE $1{CARD_GROUP_ORDER}"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(cards)
    }

    async fn cards_by_user(&self, user_id: Uuid) -> Result<Vec<RecipeCard>, DomainError> {
        let cards = sqlx::query_as::<_, RecipeCard>(&format!(
            "{CARD_SELECT} WHERE r.user_id = $1{CARD_GROUP_ORDER}"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(cards)
    }

    async fn author_username(&self, user_id: Uuid) -> Result<Option<String>, DomainError> {
        let username =
            sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(username)
    }

    async fn add_ingredients(
        &self,
        recipe_id: Uuid,
        ingredients: &[String],
    ) -> Result<Vec<Ingredient>, DomainError> {
        let mut inserted = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            let row = sqlx::query_as::<_, Ingredient>(
                "INSERT INTO recipe_ingredients (id, recipe_id, ingredient, quantity, unit)
                 VALUES ($1, $2, $3, '1', 'unit')
                 RETURNING id, recipe_id, ingredient, quantity, unit",
            )
            .bind(Uuid::now_v7())
            .bind(recipe_id)
            .bind(ingredient)
            .fetch_one(&self.pool)
            .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn add_instructions(
        &self,
        recipe_id: Uuid,
        steps: &[String],
    ) -> Result<Vec<Instruction>, DomainError> {
        let mut inserted = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            let row = sqlx::query_as::<_, Instruction>(
                "INSERT INTO recipe_instructions (id, recipe_id, step_number, instruction)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, recipe_id, step_number, instruction",
            )
            .bind(Uuid::now_v7())
            .bind(recipe_id)
            .bind((index + 1) as i32)
            .bind(step)
            .fetch_one(&self.pool)
            .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn ingredients(&self, recipe_id: Uuid) -> Result<Vec<Ingredient>, DomainError> {
        let rows = sqlx::query_as::<_, Ingredient>(
            "SELECT id, recipe_id, ingredient, quantity, unit
             FROM recipe_ingredients WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn instructions(&self, recipe_id: Uuid) -> Result<Vec<Instruction>, DomainError> {
        let rows = sqlx::query_as::<_, Instruction>(
            "SELECT id, recipe_id, step_number, instruction
             FROM recipe_instructions WHERE recipe_id = $1
             ORDER BY step_number",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
