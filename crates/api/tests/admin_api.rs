//! Integration tests for the `/admin/users` endpoints.

mod common;

use axum::http::StatusCode;
use helpdesk_core::roles::{ROLE_ADMIN, ROLE_AGENT};
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_test_user, get_auth, login_token, post_json,
    post_json_auth,
};

fn new_agent_body() -> serde_json::Value {
    json!({
        "email": "fresh.agent@example.com",
        "name": "Fresh Agent",
        "password": "a-long-enough-password",
        "role": "agent",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_creates_an_agent_account(pool: PgPool) {
    create_test_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    let app = build_test_app(pool);
    let token = login_token(app.clone(), "admin@example.com").await;

    let response = post_json_auth(app.clone(), "/api/v1/admin/users", &token, new_agent_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "fresh.agent@example.com");
    assert_eq!(json["data"]["role"], "agent");
    assert_eq!(json["data"]["is_active"], true);
    // Credential material never leaves the server.
    assert!(json["data"].get("password_hash").is_none());

    // The new account is immediately usable.
    let login = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "fresh.agent@example.com", "password": "a-long-enough-password" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_is_a_conflict(pool: PgPool) {
    create_test_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    let app = build_test_app(pool);
    let token = login_token(app.clone(), "admin@example.com").await;

    let first = post_json_auth(app.clone(), "/api/v1/admin/users", &token, new_agent_body()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(app, "/api/v1/admin/users", &token, new_agent_body()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_admin_callers_are_forbidden(pool: PgPool) {
    create_test_user(&pool, "agent@example.com", ROLE_AGENT).await;
    let app = build_test_app(pool);
    let token = login_token(app.clone(), "agent@example.com").await;

    let response = post_json_auth(app.clone(), "/api/v1/admin/users", &token, new_agent_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unauthenticated_callers_are_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/admin/users", new_agent_body()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_rejects_bad_input(pool: PgPool) {
    create_test_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    let app = build_test_app(pool);
    let token = login_token(app.clone(), "admin@example.com").await;

    let cases = [
        (
            "customer role not allowed here",
            json!({ "email": "x@example.com", "name": "X", "password": "long-enough-pw", "role": "customer" }),
        ),
        (
            "unknown role",
            json!({ "email": "x@example.com", "name": "X", "password": "long-enough-pw", "role": "superuser" }),
        ),
        (
            "short password",
            json!({ "email": "x@example.com", "name": "X", "password": "short", "role": "agent" }),
        ),
        (
            "invalid email",
            json!({ "email": "not-an-email", "name": "X", "password": "long-enough-pw", "role": "agent" }),
        ),
        (
            "blank name",
            json!({ "email": "x@example.com", "name": "  ", "password": "long-enough-pw", "role": "agent" }),
        ),
    ];

    for (label, body) in cases {
        let response = post_json_auth(app.clone(), "/api/v1/admin/users", &token, body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "case '{label}' should be rejected"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_users_returns_all_accounts(pool: PgPool) {
    create_test_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    create_test_user(&pool, "agent@example.com", ROLE_AGENT).await;
    let app = build_test_app(pool);
    let token = login_token(app.clone(), "admin@example.com").await;

    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let emails: Vec<&str> = users.iter().map(|u| u["email"].as_str().unwrap()).collect();
    assert!(emails.contains(&"admin@example.com"));
    assert!(emails.contains(&"agent@example.com"));
}
