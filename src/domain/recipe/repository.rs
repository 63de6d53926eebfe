use super::super::shared::errors::DomainError;
use super::entity::{Ingredient, Instruction, NewRecipe, Recipe, RecipeCard};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError>;
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    async fn list_cards(&self) -> Result<Vec<RecipeCard>, DomainError>;
    async fn search_cards(&self, query: &str) -> Result<Vec<RecipeCard>, DomainError>;
    async fn cards_by_user(&self, user_id: Uuid) -> Result<Vec<RecipeCard>, DomainError>;
    async fn author_username(&self, user_id: Uuid) -> Result<Option<String>, DomainError>;
    async fn add_ingredients(
        &self,
        recipe_id: Uuid,
        ingredients: &[String],
    ) -> Result<Vec<Ingredient>, DomainError>;
    async fn add_instructions(
        &self,
        recipe_id: Uuid,
        steps: &[String],
    ) -> Result<Vec<Instruction>, DomainError>;
    async fn ingredients(&self, recipe_id: Uuid) -> Result<Vec<Ingredient>, DomainError>;
    async fn instructions(&self, recipe_id: Uuid) -> Result<Vec<Instruction>, DomainError>;
}
