//! Social interaction endpoints: like toggle, rating upsert, comment append,
//! aggregated stats and per-user like status.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::presentation::http::{
    errors::AppError, middleware::user::require_user_id, state::AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct RateRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    let liked = state.interactions.toggle_like(id, user_id).await?;
    Ok(Json(serde_json::json!({ "liked": liked })))
}

pub async fn rate_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<RateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let rating = state.interactions.set_rating(id, user_id, body.rating).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": rating })))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<CommentRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    // Identity was already verified by this decode; it is passed down as-is
    // rather than re-derived anywhere below.
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let comment = state
        .interactions
        .add_comment(id, user_id, body.comment)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": comment })),
    ))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let summary = state.interactions.get_stats(id).await?;
    Ok(Json(serde_json::to_value(summary).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn like_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    let status = state.interactions.like_status(id, user_id).await?;
    Ok(Json(serde_json::json!({
        "liked": status.liked,
        "likes_count": status.likes_count,
    })))
}
