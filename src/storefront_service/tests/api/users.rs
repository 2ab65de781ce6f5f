use serde_json::{Value, json};
use storefront_adapters::config::RateLimitSetting;

use crate::helpers::{
    COOKIE_NAME, TestApp, assert_redirects_to_login, get_random_email, signup_body,
};

#[tokio::test]
async fn signup_returns_the_user_and_sets_the_session_cookie() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.post_signup(&signup_body(&email, "password123")).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .expect("No session cookie found");
    assert!(!cookie.value().is_empty());
    assert!(cookie.http_only());

    let user: Value = response.json().await.unwrap();
    assert_eq!(user["email"], email);
    assert_eq!(user["first_name"], "Ada");
    assert_eq!(user["last_name"], "Lovelace");
    assert!(user["id"].is_string());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn signup_rejects_invalid_input_with_the_first_issue() {
    let app = TestApp::new().await;

    let cases = [
        (signup_body("not-an-email", "password123"), "Invalid email"),
        (
            json!({
                "email": get_random_email(),
                "firstName": "  ",
                "lastName": "Lovelace",
                "password": "password123",
            }),
            "firstName is required",
        ),
        (signup_body(&get_random_email(), "short"), "at least 8 characters"),
    ];

    for (body, message) in cases {
        let response = app.post_signup(&body).await;
        assert_eq!(response.status().as_u16(), 400, "input: {body}");
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], message);
    }
}

#[tokio::test]
async fn signup_rejects_a_malformed_body() {
    let app = TestApp::new().await;

    let response = app.post_signup(&json!({ "email": "a@b.com" })).await;

    assert_eq!(response.status().as_u16(), 400);
    let error: Value = response.json().await.unwrap();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn signup_with_a_taken_email_is_a_bad_request() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let first = app.post_signup(&signup_body(&email, "password123")).await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app.post_signup(&signup_body(&email, "password456")).await;
    assert_eq!(second.status().as_u16(), 400);
    let error: Value = second.json().await.unwrap();
    assert_eq!(error["error"], "Email already exists");
}

#[tokio::test]
async fn login_with_valid_credentials_starts_a_session() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.post_signup(&signup_body(&email, "password123")).await;
    app.post_logout().await;

    let response = app
        .post_login(&json!({ "email": email, "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.cookies().any(|cookie| cookie.name() == COOKIE_NAME));

    let me = app.get_me().await;
    assert_eq!(me.status().as_u16(), 200);
    let user: Value = me.json().await.unwrap();
    assert_eq!(user["email"], email);
}

#[tokio::test]
async fn login_with_a_wrong_password_is_unauthorized_and_sets_no_cookie() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.post_signup(&signup_body(&email, "password123")).await;

    let response = app
        .post_login(&json!({ "email": email, "password": "password999" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(!response.cookies().any(|cookie| cookie.name() == COOKIE_NAME));
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Invalid log in credentials");
}

#[tokio::test]
async fn login_with_an_unknown_email_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": get_random_email(), "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn me_without_a_session_redirects_to_login() {
    let app = TestApp::new().await;

    let response = app.get_me().await;

    assert_redirects_to_login(&response);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::new().await;
    app.signup_random_user().await;
    assert_eq!(app.get_me().await.status().as_u16(), 200);

    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Logged out successfully");

    assert_redirects_to_login(&app.get_me().await);
}

#[tokio::test]
async fn logout_without_a_session_still_succeeds() {
    let app = TestApp::new().await;

    let response = app.post_logout().await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn credential_routes_are_rate_limited_per_client() {
    let app = TestApp::with_rate_limit(RateLimitSetting {
        enabled: true,
        replenish_seconds: 60,
        burst: 2,
        trust_proxy_headers: false,
    })
    .await;
    let body = json!({ "email": get_random_email(), "password": "password123" });

    assert_eq!(app.post_login(&body).await.status().as_u16(), 401);
    assert_eq!(app.post_login(&body).await.status().as_u16(), 401);
    assert_eq!(app.post_login(&body).await.status().as_u16(), 429);

    // Other routes are not limited.
    assert_eq!(app.get_products("").await.status().as_u16(), 200);
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_escape_the_rate_limit() {
    let app = TestApp::with_rate_limit(RateLimitSetting {
        enabled: true,
        replenish_seconds: 60,
        burst: 2,
        trust_proxy_headers: false,
    })
    .await;
    let body = json!({ "email": get_random_email(), "password": "password123" });

    let mut statuses = Vec::new();
    for n in 1..=4 {
        let response = app
            .http_client
            .post(format!("{}/users/login", app.address))
            .header("x-forwarded-for", format!("203.0.113.{n}"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");
        statuses.push(response.status().as_u16());
    }

    assert_eq!(statuses, vec![401, 401, 429, 429]);
}
