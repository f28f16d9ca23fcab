mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    access_token_for, create_test_post, create_test_user, expired_access_token_for,
    generate_unique_email, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn create_post_request(body: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header("content-type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({ "body": body })).unwrap(),
        ))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_success(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(create_post_request(
            "Hello, world!",
            &access_token_for(user.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["body"], "Hello, world!");
    assert_eq!(body["user_id"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_masks_profanity(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(create_post_request(
            "This is a Kerfuffle opinion I need to share with the world!",
            &access_token_for(user.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        body["body"],
        "This is a **** opinion I need to share with the world!"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_too_long(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(create_post_request(
            &"x".repeat(141),
            &access_token_for(user.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Post is too long");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_requires_auth(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "body": "anonymous post" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_expired_token(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(create_post_request(
            "too late",
            &expired_access_token_for(user.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_posts_ordered_by_creation(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    create_test_post(&mut tx, user.id, "first").await;
    tx.commit().await.unwrap();

    // now() is fixed per transaction, so the second post needs its own
    // transaction to get a later created_at
    let mut tx = pool.begin().await.unwrap();
    create_test_post(&mut tx, user.id, "second").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/posts")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["body"], "first");
    assert_eq!(posts[1]["body"], "second");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_post_by_id(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    let post_id = create_test_post(&mut tx, user.id, "findable").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/posts/{post_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["id"], post_id.to_string());
    assert_eq!(body["body"], "findable");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_post_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/posts/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_post(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    let post_id = create_test_post(&mut tx, user.id, "ephemeral").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/posts/{post_id}"))
        .header(
            "Authorization",
            format!("Bearer {}", access_token_for(user.id)),
        )
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/posts/{post_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_post_of_another_user(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let author = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    let intruder = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    let post_id = create_test_post(&mut tx, author.id, "mine, not yours").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/posts/{post_id}"))
        .header(
            "Authorization",
            format!("Bearer {}", access_token_for(intruder.id)),
        )
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The post must survive the attempt
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/posts/{post_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_post(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "testpass123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/posts/{}", Uuid::new_v4()))
        .header(
            "Authorization",
            format!("Bearer {}", access_token_for(user.id)),
        )
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
