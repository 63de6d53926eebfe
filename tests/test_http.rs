//! End-to-end handler tests over the full router and a real database.
//!
//! Each test skips itself when no reachable Postgres is found, so the suite
//! stays runnable in environments without one.

mod helpers;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use helpers::{expect_status, insert_recipe, read_json, send, signup_user, spawn_app};
use serde_json::{Value, json};
use uuid::Uuid;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

fn post_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn error_message(res: axum::response::Response) -> String {
    let body: Value = read_json(res).await;
    body["error"]
        .as_str()
        .expect("missing error field")
        .to_string()
}

async fn add_comment(app: &Router, token: &str, recipe_id: Uuid, text: &str) {
    let req = post_json(
        &format!("/api/interactions/{}/comment", recipe_id),
        token,
        json!({ "comment": text }),
    );
    expect_status(send(app, req).await, StatusCode::CREATED).await;
}

#[tokio::test]
async fn like_without_token_is_unauthorized() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/interactions/{}/like", Uuid::now_v7()))
        .body(Body::empty())
        .expect("failed to build request");

    let res = send(&test_app.app, req).await;
    assert!(
        res.headers().contains_key("x-request-id"),
        "every response should carry a request id"
    );
    let res = expect_status(res, StatusCode::UNAUTHORIZED).await;
    assert_eq!(error_message(res).await, "No token provided");
}

#[tokio::test]
async fn interactions_on_unknown_recipe_are_not_found() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };
    let (_, token) = signup_user(&test_app.app, "missing-recipe").await;
    let unknown = Uuid::now_v7();

    for (uri, body) in [
        (format!("/api/interactions/{}/like", unknown), json!({})),
        (
            format!("/api/interactions/{}/rate", unknown),
            json!({ "rating": 4 }),
        ),
        (
            format!("/api/interactions/{}/comment", unknown),
            json!({ "comment": "hello" }),
        ),
    ] {
        let res = send(&test_app.app, post_json(&uri, &token, body)).await;
        let res = expect_status(res, StatusCode::NOT_FOUND).await;
        assert_eq!(error_message(res).await, "Recipe not found");
    }
}

#[tokio::test]
async fn rating_out_of_range_is_rejected_with_bad_request() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };
    let (owner, token) = signup_user(&test_app.app, "rate-range").await;
    let recipe_id = insert_recipe(&test_app.db, owner, "Pad Thai").await;

    let req = post_json(
        &format!("/api/interactions/{}/rate", recipe_id),
        &token,
        json!({ "rating": 9 }),
    );
    expect_status(send(&test_app.app, req).await, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn only_the_owner_can_delete_a_recipe() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };
    let (owner, owner_token) = signup_user(&test_app.app, "delete-owner").await;
    let (_, other_token) = signup_user(&test_app.app, "delete-other").await;
    let recipe_id = insert_recipe(&test_app.db, owner, "Banh Mi").await;

    let forbidden = Request::builder()
        .method("DELETE")
        .uri(format!("/api/recipes/{}", recipe_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", other_token))
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&test_app.app, forbidden).await;
    let res = expect_status(res, StatusCode::FORBIDDEN).await;
    assert_eq!(
        error_message(res).await,
        "Not authorized to delete this recipe"
    );

    let allowed = Request::builder()
        .method("DELETE")
        .uri(format!("/api/recipes/{}", recipe_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", owner_token))
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&test_app.app, allowed).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["message"], "Recipe deleted successfully");
}

#[tokio::test]
async fn comment_listing_survives_a_deleted_author() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };
    let (owner, _) = signup_user(&test_app.app, "comment-owner").await;
    let (commenter, commenter_token) = signup_user(&test_app.app, "comment-author").await;
    let recipe_id = insert_recipe(&test_app.db, owner, "Laksa").await;

    add_comment(&test_app.app, &commenter_token, recipe_id, "Delicious!").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(commenter)
        .execute(&test_app.db)
        .await
        .expect("failed to delete commenter");

    let res = send(
        &test_app.app,
        get(&format!("/api/recipes/{}/comments", recipe_id)),
    )
    .await;
    let comments: Vec<Value> = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["comment"], "Delicious!");
    assert_eq!(comments[0]["username"], "Unknown User");
    assert!(comments[0]["user_id"].is_null());
}

#[tokio::test]
async fn stats_for_unknown_recipe_are_all_zeros() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };

    let res = send(
        &test_app.app,
        get(&format!("/api/interactions/{}/stats", Uuid::now_v7())),
    )
    .await;
    let stats: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(stats["likes_count"].as_i64(), Some(0));
    assert_eq!(stats["rating"]["average"].as_f64(), Some(0.0));
    assert_eq!(stats["rating"]["count"].as_i64(), Some(0));
    assert_eq!(stats["comments_count"].as_i64(), Some(0));
}

#[tokio::test]
async fn signup_reports_the_stored_creation_time() {
    let Some(test_app) = spawn_app().await else {
        eprintln!("skipping: no reachable postgres");
        return;
    };

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "email": helpers::unique_email("signup-ts"),
                "password": "StrongerPass123!",
                "username": format!("signup-ts-{}", Uuid::now_v7()),
            })
            .to_string(),
        ))
        .expect("failed to build signup request");

    let res = expect_status(send(&test_app.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    let user_id = body["user"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("missing user id");
    let reported = body["user"]["created_at"]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .expect("missing created_at")
        .with_timezone(&Utc);

    let stored = sqlx::query_scalar::<_, DateTime<Utc>>(
        "SELECT created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(&test_app.db)
    .await
    .expect("user row missing");

    assert_eq!(reported, stored);
}
