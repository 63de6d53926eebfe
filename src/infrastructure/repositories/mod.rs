pub mod sqlx_interaction_repository;
pub mod sqlx_recipe_repository;
