use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn admin_root_redirects_to_login() {
    // Given
    let app = spawn_app().await;

    for path in ["/admin", "/admin/"] {
        // When
        let response = app.get(path).await;

        // Then
        assert_is_redirect_to(&response, "/admin/login");
    }

    // Follow the redirect
    let html_page = app.get_html("/admin/login").await;
    assert!(html_page.contains("<title>Admin login</title>"));
}

#[tokio::test]
async fn admin_root_redirect_keeps_the_query_string() {
    // Given
    let app = spawn_app().await;

    // When
    let response = app.get("/admin?next=users").await;

    // Then
    assert_is_redirect_to(&response, "/admin/login?next=users");
}

#[tokio::test]
async fn percent_encoded_paths_reach_the_same_page() {
    // Given
    let app = spawn_app().await;

    // When
    let response = app.get("/admin/log%69n").await;

    // Then
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("<title>Admin login</title>"));
}

#[tokio::test]
async fn login_page_posts_to_the_backend_api() {
    // Given
    let app = spawn_app().await;

    // When
    let response = app.get("/admin/login").await;

    // Then
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"action="http://api.test/auth/login""#));
}

#[tokio::test]
async fn each_admin_page_renders_its_own_shell() {
    // Given
    let app = spawn_app().await;
    let test_cases = vec![
        ("/admin/dashboard", "<title>Admin dashboard</title>"),
        ("/admin/users", r#"data-source="http://api.test/users/""#),
        ("/admin/listings", r#"data-source="http://api.test/listings""#),
    ];

    for (path, marker) in test_cases {
        // When
        let response = app.get(path).await;

        // Then
        assert_eq!(
            200,
            response.status().as_u16(),
            "The admin page {} did not render.",
            path
        );
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains(marker),
            "The admin page {} is missing {}.",
            path,
            marker
        );
    }
}

#[tokio::test]
async fn the_admin_table_is_fetched_once_per_process() {
    // Given
    let app = spawn_app().await;
    assert_eq!(app.admin_table.fetch_count(), 0);

    // When
    for path in ["/admin", "/admin/dashboard", "/admin/users", "/admin/listings", "/admin/users"] {
        app.get(path).await;
    }

    // Then
    assert!(app.admin_table.is_loaded());
    assert_eq!(app.admin_table.fetch_count(), 1);
}

#[tokio::test]
async fn unknown_admin_pages_return_404() {
    // Given
    let app = spawn_app().await;

    for path in ["/admin/settings", "/admin/users/42"] {
        // When
        let response = app.get(path).await;

        // Then
        assert_eq!(
            404,
            response.status().as_u16(),
            "The API did not fail with 404 Not Found for {}.",
            path
        );
    }
}
