use crate::{
    application::interactions::use_case::InteractionService,
    config::Config,
    domain::recipe::repository::RecipeRepository,
    infrastructure::storage::traits::StorageService,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub storage: Arc<dyn StorageService>,
    pub http: reqwest::Client,
    pub config: Config,
    pub recipe_repo: Arc<dyn RecipeRepository>,
    pub interactions: InteractionService,
}
