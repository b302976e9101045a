use actix_web::{http::header::ContentType, HttpResponse};

use crate::domain::PageId;

pub fn admin_dashboard() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>{title}</title>
</head>
<body>
    <p>Available actions:</p>
    <ol>
        <li><a href="users">Manage users</a></li>
        <li><a href="listings">Manage listings</a></li>
    </ol>
</body>
</html>"#,
            title = PageId::Dashboard.title(),
        ))
}
