//! Integration tests for user and admin authentication endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, create_test_app, json_request, parse_response_body,
    request_with_cookie, run_migrations, session_cookie_from, test_config, try_test_pool,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn register_login_profile_flow() {
    let Some(pool) = try_test_pool().await else {
        return;
    };
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/register",
            json!({"name": "Sam", "email": "sam@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["email"], "sam@example.com");
    // The hash never leaves the server
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password").is_none());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({"email": "sam@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie_from(&response).expect("login should set a token cookie");

    let response = app
        .clone()
        .oneshot(request_with_cookie(Method::GET, "/profile", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["email"], "sam@example.com");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn duplicate_registration_is_422() {
    let Some(pool) = try_test_pool().await else {
        return;
    };
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let payload = json!({"name": "Sam", "email": "dup@example.com", "password": "hunter2"});

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request(Method::POST, "/register", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn login_failures_distinguish_unknown_email_from_bad_password() {
    let Some(pool) = try_test_pool().await else {
        return;
    };
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/register",
            json!({"name": "Sam", "email": "sam@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    // Unknown email
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({"email": "nobody@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Wrong password
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({"email": "sam@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn profile_without_session_is_null() {
    let Some(pool) = try_test_pool().await else {
        return;
    };
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    // No cookie means no session, answered with a 200 null body
    let response = app
        .clone()
        .oneshot(common::empty_request(Method::GET, "/profile"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body.is_null());

    // A token that is present but garbage is a 401, not an error page
    let response = app
        .oneshot(request_with_cookie(
            Method::GET,
            "/profile",
            "token=not-a-jwt",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_login_returns_token_in_body() {
    let Some(pool) = try_test_pool().await else {
        return;
    };
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/admin/register",
            json!({"name": "Root", "email": "root@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["role"], "admin");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/admin/login",
            json!({"email": "root@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body["token"].as_str().unwrap().contains('.'));
    assert_eq!(body["admin"]["email"], "root@example.com");

    cleanup_all_test_data(&pool).await;
}
