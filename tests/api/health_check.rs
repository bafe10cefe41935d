use crate::helpers;

#[tokio::test]
async fn health_check_works() {
    let app = helpers::spawn_app().await;

    // With reqwest, we approach it as a user would, performing requests
    // from outside.
    let response = app
        .api_client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    // Simple health check -> should not return any content.
    assert_eq!(response.content_length(), Some(0));
}
