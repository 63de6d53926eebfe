use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::shared::errors::DomainError;

/// A user's rating of a recipe. At most one row exists per
/// (recipe, user) pair; a second submission replaces the value.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rating value constrained to the 1..=5 star scale.
///
/// Untyped client input is validated here before it can reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingScore(i32);

impl RatingScore {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::ValidationError(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
