use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    // Given
    let app = spawn_app().await;

    // When
    let response = app.get("/health_check").await;

    // Then
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn root_reports_the_service_status() {
    // Given
    let app = spawn_app().await;

    // When
    let response = app.get("/").await;

    // Then
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Real Estate Admin up");
}

#[tokio::test]
async fn status_endpoints_do_not_fetch_the_admin_table() {
    // Given
    let app = spawn_app().await;

    // When
    app.get("/").await;
    app.get("/health_check").await;

    // Then
    assert!(!app.admin_table.is_loaded());
    assert_eq!(app.admin_table.fetch_count(), 0);
}
