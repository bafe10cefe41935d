use reqwest::Method;

use crate::helpers::{
    assert_cors_headers, assert_json_error, spawn_app, spawn_app_with, RecordingRelay,
    ORGANIZATION_INBOX, RELAY_FAILURE,
};

#[tokio::test]
async fn contact_returns_200_and_sends_two_emails_for_valid_data() {
    let app = spawn_app().await;

    let response = app
        .post_contact(serde_json::json!({"name": "Ada Lovelace", "email": "ada@example.com"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"success": true}));

    assert_eq!(app.relay.sent().len(), 2);
    let welcome = app.relay.sent_to("ada@example.com");
    assert!(welcome.reply_to.is_none());
    let notification = app.relay.sent_to(ORGANIZATION_INBOX);
    assert_eq!(notification.subject, "[New Contact] Ada Lovelace");
    assert_eq!(
        notification.reply_to,
        Some("ada@example.com".to_string())
    );
}

#[tokio::test]
async fn the_website_path_is_served_too() {
    let app = spawn_app().await;

    let response = app
        .post_json(
            "/api/contact",
            &serde_json::json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.relay.sent().len(), 2);
}

#[tokio::test]
async fn contact_returns_400_for_an_invalid_email() {
    let app = spawn_app().await;

    let response = app
        .post_contact(serde_json::json!({"name": "Ada", "email": "not-an-email"}))
        .await;

    assert_cors_headers(&response);
    assert_json_error(response, 400, "Invalid email address").await;
    assert!(app.relay.sent().is_empty());
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"email": "ada@example.com"}), "missing the name"),
        (
            serde_json::json!({"name": "", "email": "ada@example.com"}),
            "empty name",
        ),
        (
            serde_json::json!({"name": "   ", "email": "ada@example.com"}),
            "whitespace-only name",
        ),
        (serde_json::json!({"name": "Ada"}), "missing the email"),
        (serde_json::json!({"name": "Ada", "email": ""}), "empty email"),
        (
            serde_json::json!({"name": 42, "email": "ada@example.com"}),
            "a name that is not a string",
        ),
        (serde_json::json!({}), "missing both name and email"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact(invalid_body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        assert_json_error(response, 400, "Missing required fields").await;
    }
    assert!(app.relay.sent().is_empty());
}

#[tokio::test]
async fn contact_returns_400_for_a_body_that_is_not_json() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/contact", &app.address))
        .header("Content-Type", "application/json")
        .body("name=Ada&email=ada@example.com")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_json_error(response, 400, "Missing required fields").await;
}

#[tokio::test]
async fn line_breaks_in_the_name_never_reach_the_subject() {
    let app = spawn_app().await;

    for name in ["Ada\nLovelace", "Ada\r\nLovelace"] {
        let response = app
            .post_contact(serde_json::json!({"name": name, "email": "ada@example.com"}))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let subjects: Vec<String> = app
        .relay
        .sent()
        .into_iter()
        .filter(|m| m.to == ORGANIZATION_INBOX)
        .map(|m| m.subject)
        .collect();
    assert_eq!(subjects.len(), 2);
    for subject in subjects {
        assert_eq!(subject, "[New Contact] Ada Lovelace");
    }
}

#[tokio::test]
async fn markup_in_the_name_is_escaped() {
    let app = spawn_app().await;

    let response = app
        .post_contact(serde_json::json!({
            "name": "<script>alert('hi')</script>",
            "email": "ada@example.com"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    for message in app.relay.sent() {
        assert!(message.html_body.contains("&lt;script&gt;"));
        assert!(!message.html_body.contains("<script>"));
    }
}

#[tokio::test]
async fn markup_in_the_email_is_escaped() {
    let app = spawn_app().await;

    let response = app
        .post_contact(serde_json::json!({"name": "Ada", "email": "<script>@evil.com"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.relay.sent().len(), 2);
    for message in app.relay.sent() {
        assert!(!message.html_body.contains("<script>"));
    }
    let notification = app.relay.sent_to(ORGANIZATION_INBOX);
    assert!(notification
        .html_body
        .contains(r#"href="mailto:&lt;script&gt;@evil.com""#));
    assert!(notification
        .html_body
        .contains(">&lt;script&gt;@evil.com</a>"));
    assert_eq!(notification.reply_to, Some("<script>@evil.com".to_string()));
    // The welcome email goes to the address exactly as submitted.
    app.relay.sent_to("<script>@evil.com");
}

#[tokio::test]
async fn any_address_of_the_right_shape_is_attempted() {
    let app = spawn_app().await;

    for email in ["a,b@example.com", "ada(x)@example.com", "ada@[x].com"] {
        let response = app
            .post_contact(serde_json::json!({"name": "Ada", "email": email}))
            .await;
        assert_eq!(response.status().as_u16(), 200, "{} was rejected", email);
    }
    assert_eq!(app.relay.sent().len(), 6);
}

#[tokio::test]
async fn contact_returns_500_without_details_when_the_relay_fails() {
    let app = spawn_app_with(RecordingRelay::refusing()).await;

    let response = app
        .post_contact(serde_json::json!({"name": "Ada Lovelace", "email": "ada@example.com"}))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
    let body = response.text().await.unwrap();
    assert_eq!(body, r#"{"error":"Failed to send email. Please try again."}"#);
    assert!(!body.contains(RELAY_FAILURE));
    // Both sends were still attempted.
    assert_eq!(app.relay.sent().len(), 2);
}

#[tokio::test]
async fn options_returns_200_with_cors_headers() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .request(Method::OPTIONS, &format!("{}/contact", &app.address))
        .body("this is ignored")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    assert_eq!(response.text().await.unwrap(), "");
    assert!(app.relay.sent().is_empty());
}

#[tokio::test]
async fn other_methods_return_405() {
    let app = spawn_app().await;

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = app.request(method, "/contact").await;
        assert_cors_headers(&response);
        assert_json_error(response, 405, "Method not allowed").await;
    }
}
