use super::{
    handlers::{auth, health, interactions, recipes},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/change-password", post(auth::change_password))
        // Recipes
        .route("/api/recipes", post(recipes::create_recipe))
        .route("/api/recipes/cards", get(recipes::get_recipe_cards))
        .route("/api/recipes/search", get(recipes::search_recipes))
        .route("/api/recipes/me", get(recipes::my_recipes))
        .route(
            "/api/recipes/{id}",
            axum::routing::delete(recipes::delete_recipe),
        )
        .route("/api/recipes/{id}/details", get(recipes::get_recipe_details))
        .route(
            "/api/recipes/{id}/comments",
            get(recipes::get_recipe_comments),
        )
        // Interactions
        .route(
            "/api/interactions/{id}/like",
            post(interactions::toggle_like),
        )
        .route(
            "/api/interactions/{id}/rate",
            post(interactions::rate_recipe),
        )
        .route(
            "/api/interactions/{id}/comment",
            post(interactions::add_comment),
        )
        .route("/api/interactions/{id}/stats", get(interactions::get_stats))
        .route(
            "/api/interactions/{id}/like/status",
            get(interactions::like_status),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
