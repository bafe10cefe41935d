use reqwest::Method;

use crate::helpers::{
    assert_cors_headers, assert_json_error, spawn_app, spawn_app_with, RecordingRelay,
    ORGANIZATION_INBOX, RELAY_FAILURE,
};

fn grace() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Grace Hopper",
        "company": "Acme",
        "email": "grace@acme.com",
        "tierName": "Gold",
        "tierPrice": "$5,000"
    })
}

#[tokio::test]
async fn a_lead_without_phone_is_confirmed_and_forwarded() {
    let app = spawn_app().await;

    let response = app.post_send_email(grace()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"success": true}));

    assert_eq!(app.relay.sent().len(), 2);
    let confirmation = app.relay.sent_to("grace@acme.com");
    assert!(confirmation.html_body.contains("Gold – $5,000"));

    let lead = app.relay.sent_to(ORGANIZATION_INBOX);
    assert_eq!(lead.subject, "[New Lead] Grace Hopper – Gold ($5,000)");
    assert_eq!(
        lead.reply_to,
        Some("grace@acme.com".to_string())
    );
    assert!(!lead.html_body.contains("Phone"));
}

#[tokio::test]
async fn a_phone_number_is_included_when_given() {
    let app = spawn_app().await;
    let mut body = grace();
    body["phone"] = serde_json::json!("+1 555 0100");

    let response = app.post_json("/api/send-email", &body).await;

    assert_eq!(response.status().as_u16(), 200);
    let lead = app.relay.sent_to(ORGANIZATION_INBOX);
    assert!(lead.html_body.contains("+1 555 0100"));
    let confirmation = app.relay.sent_to("grace@acme.com");
    assert!(confirmation.html_body.contains("+1 555 0100"));
}

#[tokio::test]
async fn send_email_returns_400_when_a_required_field_is_missing() {
    let app = spawn_app().await;

    for field in ["fullName", "company", "email", "tierName", "tierPrice"] {
        let mut body = grace();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_send_email(body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when {} was missing.",
            field
        );
        assert_json_error(response, 400, "Missing required fields").await;
    }
    assert!(app.relay.sent().is_empty());
}

#[tokio::test]
async fn send_email_returns_400_for_an_invalid_email() {
    let app = spawn_app().await;
    let mut body = grace();
    body["email"] = serde_json::json!("not-an-email");

    let response = app.post_send_email(body).await;

    assert_json_error(response, 400, "Invalid email address").await;
    assert!(app.relay.sent().is_empty());
}

#[tokio::test]
async fn every_field_is_escaped() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "fullName": "<b>Grace</b>",
        "company": "<script>steal()</script>",
        "email": "grace@acme.com",
        "phone": "<i>555</i>",
        "tierName": "<u>Gold</u>",
        "tierPrice": "$5,000"
    });

    let response = app.post_send_email(body).await;

    assert_eq!(response.status().as_u16(), 200);
    for message in app.relay.sent() {
        assert!(message.html_body.contains("&lt;script&gt;steal()&lt;/script&gt;"));
        for raw in ["<script>", "<b>", "<i>", "<u>"] {
            assert!(!message.html_body.contains(raw));
        }
    }
}

#[tokio::test]
async fn send_email_returns_500_without_details_when_the_relay_fails() {
    let app = spawn_app_with(RecordingRelay::refusing()).await;

    let response = app.post_send_email(grace()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.unwrap();
    assert_eq!(body, r#"{"error":"Failed to send email. Please try again."}"#);
    assert!(!body.contains(RELAY_FAILURE));
    assert_eq!(app.relay.sent().len(), 2);
}

#[tokio::test]
async fn options_returns_200_with_cors_headers() {
    let app = spawn_app().await;

    let response = app.request(Method::OPTIONS, "/send-email").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn other_methods_return_405() {
    let app = spawn_app().await;

    for method in [Method::GET, Method::PATCH] {
        let response = app.request(method, "/send-email").await;
        assert_cors_headers(&response);
        assert_json_error(response, 405, "Method not allowed").await;
    }
}
