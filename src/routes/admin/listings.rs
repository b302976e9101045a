use actix_web::{http::header::ContentType, HttpResponse};

use crate::domain::PageId;
use crate::startup::ApiBaseUrl;

pub fn listings_page(api: &ApiBaseUrl) -> HttpResponse {
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
    <table data-source="{}/listings">
        <thead>
            <tr>
                <th>Price</th><th>Address</th><th>City</th><th>State</th>
                <th>Bedrooms</th><th>Bathrooms</th>
            </tr>
        </thead>
        <tbody></tbody>
    </table>
    <p><a href="dashboard">&lt;- Back</a></p>
</body>
</html>"#,
            api.0,
            title = PageId::Listings.title(),
        ))
}
