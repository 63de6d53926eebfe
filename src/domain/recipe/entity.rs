use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::shared::errors::DomainError;

/// Core domain entity representing a shared recipe.
///
/// A recipe is owned by the user who submitted it, carries an optional image
/// stored in blob storage, and accumulates interaction rows (likes, ratings,
/// comments) that live in their own tables and cascade on delete.
///
/// # Invariants
/// - `id` must exist before any interaction row referencing it is created;
///   interaction services verify existence and fail with NotFound otherwise.
/// - Only the owner (`user_id`) may delete the recipe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: Uuid,

    /// Owner of this recipe; deletion is restricted to this user.
    pub user_id: Uuid,

    pub title: String,
    pub description: Option<String>,

    /// Public URL of the stored image, if one was attached.
    pub image_url: Option<String>,

    /// Preparation time in minutes.
    pub prep_time: i32,

    /// Cooking time in minutes.
    pub cook_time: i32,

    pub servings: i32,
    pub difficulty: Difficulty,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Difficulty of preparing a recipe.
///
/// Clients submit this as free text; it is validated against this closed set
/// at the boundary before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "text")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::ValidationError(format!(
                "difficulty must be Easy, Medium or Hard, got '{}'",
                other
            ))),
        }
    }
}

/// Input for creating a recipe; the id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: Difficulty,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ingredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient: String,
    pub quantity: String,
    pub unit: String,
}

/// One ordered preparation step of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Instruction {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub step_number: i32,
    pub instruction: String,
}

/// Listing projection: recipe fields joined with the author's username and
/// the current like count, as shown on browse/search/profile pages.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecipeCard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub username: Option<String>,
    pub likes_count: i64,
}

/// Splits a comma-separated ingredient field into trimmed, non-empty entries.
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str(" Medium ").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_rejects_unknown_values() {
        assert!(Difficulty::from_str("expert").is_err());
        assert!(Difficulty::from_str("").is_err());
    }

    #[test]
    fn ingredient_list_drops_blank_entries() {
        let parsed = parse_ingredient_list("flour, sugar , ,butter,");
        assert_eq!(parsed, vec!["flour", "sugar", "butter"]);
    }
}
