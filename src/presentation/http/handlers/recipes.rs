//! Recipe CRUD: multipart creation with image attachment, card listings,
//! detail assembly, search and owner-gated deletion.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    domain::recipe::entity::{Difficulty, NewRecipe, parse_ingredient_list},
    presentation::http::{
        errors::AppError, middleware::user::require_user_id, state::AppState,
    },
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

fn parse_positive_int(field: &str, raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| {
            AppError::ValidationError(format!("{} must be a non-negative integer", field))
        })
}

/// Sanitizes an uploaded filename into a storage key segment.
fn storage_file_name(original: &str) -> String {
    let cleaned: String = original
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{}-{}", Uuid::now_v7(), cleaned)
}

pub async fn create_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let mut title = String::new();
    let mut description = None;
    let mut prep_time = None;
    let mut cook_time = None;
    let mut servings = None;
    let mut difficulty = None;
    let mut ingredients_raw = String::new();
    let mut instructions_raw = None;
    let mut image_url_field = None;
    let mut image: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Field error".into()))?
    {
        match field.name().unwrap_or("") {
            "title" => title = field.text().await.unwrap_or_default(),
            "description" => description = Some(field.text().await.unwrap_or_default()),
            "prep_time" => prep_time = Some(field.text().await.unwrap_or_default()),
            "cook_time" => cook_time = Some(field.text().await.unwrap_or_default()),
            "servings" => servings = Some(field.text().await.unwrap_or_default()),
            "difficulty" => difficulty = Some(field.text().await.unwrap_or_default()),
            "ingredients" => ingredients_raw = field.text().await.unwrap_or_default(),
            "instructions" => instructions_raw = Some(field.text().await.unwrap_or_default()),
            "image_url" => image_url_field = Some(field.text().await.unwrap_or_default()),
            "image" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::BadRequest("Byte error".into()))?;
                image = Some((file_name, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }

    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let prep_time = parse_positive_int("prep_time", prep_time.as_deref().unwrap_or("0"))?;
    let cook_time = parse_positive_int("cook_time", cook_time.as_deref().unwrap_or("0"))?;
    let servings = parse_positive_int("servings", servings.as_deref().unwrap_or("1"))?;
    let difficulty = Difficulty::from_str(difficulty.as_deref().unwrap_or("Easy"))?;

    let ingredients = parse_ingredient_list(&ingredients_raw);
    let instructions: Vec<String> = match instructions_raw.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| AppError::BadRequest("instructions must be a JSON array of steps".into()))?,
        None => Vec::new(),
    };

    // Image source: either an uploaded file or a URL fetched server-side.
    let image_url = if let Some((file_name, content_type, data)) = image {
        let key = format!("recipes/{}", storage_file_name(&file_name));
        let url = state
            .storage
            .upload(&key, data, &content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Image upload failed: {}", e)))?;
        Some(url)
    } else if let Some(remote) = image_url_field.as_deref().filter(|s| !s.trim().is_empty()) {
        let response = state.http.get(remote.trim()).send().await?;
        if !response.status().is_success() {
            return Err(AppError::BadRequest("Failed to fetch image".into()));
        }
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let bytes = response.bytes().await?;
        let key = format!("recipes/{}-url-image.jpg", Uuid::now_v7());
        let url = state
            .storage
            .upload(&key, bytes.to_vec(), &content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Image URL upload failed: {}", e)))?;
        Some(url)
    } else {
        None
    };

    let recipe = state
        .recipe_repo
        .create(&NewRecipe {
            user_id,
            title,
            description,
            image_url,
            prep_time,
            cook_time,
            servings,
            difficulty,
        })
        .await?;

    // Follow-up inserts are not wrapped in a transaction: a failure here
    // leaves the recipe row in place.
    let ingredients = state
        .recipe_repo
        .add_ingredients(recipe.id, &ingredients)
        .await?;
    let instructions = state
        .recipe_repo
        .add_instructions(recipe.id, &instructions)
        .await?;

    tracing::info!(recipe_id = %recipe.id, "Recipe created");

    let mut value =
        serde_json::to_value(&recipe).map_err(|e| AppError::Internal(e.to_string()))?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "ingredients".to_string(),
            serde_json::to_value(&ingredients).map_err(|e| AppError::Internal(e.to_string()))?,
        );
        obj.insert(
            "instructions".to_string(),
            serde_json::to_value(&instructions).map_err(|e| AppError::Internal(e.to_string()))?,
        );
    }

    Ok((StatusCode::CREATED, Json(value)))
}

pub async fn get_recipe_cards(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cards = state.recipe_repo.list_cards().await?;
    Ok(Json(serde_json::to_value(cards).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cards = state.recipe_repo.search_cards(params.query.trim()).await?;
    Ok(Json(serde_json::to_value(cards).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn get_recipe_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let recipe = state
        .recipe_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    // Independent reads, fanned out together and joined before assembly.
    let (username, ingredients, instructions, summary) = tokio::try_join!(
        async {
            state
                .recipe_repo
                .author_username(recipe.user_id)
                .await
                .map_err(AppError::from)
        },
        async {
            state
                .recipe_repo
                .ingredients(id)
                .await
                .map_err(AppError::from)
        },
        async {
            state
                .recipe_repo
                .instructions(id)
                .await
                .map_err(AppError::from)
        },
        async { state.interactions.get_stats(id).await.map_err(AppError::from) },
    )?;

    let mut value =
        serde_json::to_value(&recipe).map_err(|e| AppError::Internal(e.to_string()))?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "user".to_string(),
            serde_json::json!({ "username": username }),
        );
        obj.insert(
            "ingredients".to_string(),
            serde_json::to_value(&ingredients).map_err(|e| AppError::Internal(e.to_string()))?,
        );
        obj.insert(
            "instructions".to_string(),
            serde_json::to_value(&instructions).map_err(|e| AppError::Internal(e.to_string()))?,
        );
        obj.insert(
            "interactions".to_string(),
            serde_json::to_value(&summary).map_err(|e| AppError::Internal(e.to_string()))?,
        );
    }

    Ok(Json(value))
}

pub async fn get_recipe_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let comments = state.interactions.list_comments(id).await?;
    Ok(Json(serde_json::to_value(comments).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn my_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    let cards = state.recipe_repo.cards_by_user(user_id).await?;
    Ok(Json(serde_json::to_value(cards).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let recipe = state
        .recipe_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    if recipe.user_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to delete this recipe".to_string(),
        ));
    }

    // Best-effort blob cleanup; a storage failure does not block the delete.
    if let Some(image_url) = &recipe.image_url {
        if let Some(file_name) = image_url.rsplit('/').next() {
            let key = format!("recipes/{}", file_name);
            if let Err(e) = state.storage.delete(&key).await {
                tracing::error!("Failed to delete stored image {}: {}", key, e);
            }
        }
    }

    state.recipe_repo.delete(id).await?;

    tracing::info!(recipe_id = %id, "Recipe deleted");

    Ok(Json(serde_json::json!({
        "message": "Recipe deleted successfully"
    })))
}
