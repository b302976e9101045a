use actix_web::{http::header::ContentType, HttpResponse};

use crate::domain::PageId;
use crate::startup::ApiBaseUrl;

pub fn login_form(api: &ApiBaseUrl) -> HttpResponse {
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
    <form action="{}/auth/login" method="post">
        <label>Email
            <input
                type="text"
                placeholder="Enter email"
                name="username"
            >
        </label>
        <label>Password
            <input
                type="password"
                placeholder="Enter Password"
                name="password"
            >
        </label>
        <button type="submit">Login</button>
    </form>
</body>
</html>"#,
            api.0,
            title = PageId::Login.title(),
        ))
}
