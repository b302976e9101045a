use actix_web::http::header::{ContentType, ALLOW};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::navigation::{Dispatcher, NavigationError};
use crate::routes::admin::render_page;
use crate::startup::ApiBaseUrl;
use crate::utils::{error_chain_fmt, see_other};

#[tracing::instrument(
    name = "Navigate",
    skip(request, dispatcher, api),
    fields(path = %request.path(), page = tracing::field::Empty)
)]
pub async fn navigate(
    request: HttpRequest,
    dispatcher: web::Data<Dispatcher>,
    api: web::Data<ApiBaseUrl>,
) -> Result<HttpResponse, AdminPageError> {
    if *request.method() != Method::GET {
        return Err(AdminPageError::MethodNotAllowed);
    }

    let resolution = dispatcher.resolve(request.path()).await?;
    tracing::Span::current().record("page", &tracing::field::display(resolution.page));

    if resolution.was_redirected() {
        let location = match request.query_string() {
            "" => resolution.path.to_string(),
            query => format!("{}?{}", resolution.path, query),
        };
        return Ok(see_other(&location));
    }
    Ok(render_page(resolution.page, &api))
}

#[derive(thiserror::Error)]
pub enum AdminPageError {
    #[error("Only GET navigations are supported")]
    MethodNotAllowed,
    #[error("Invalid navigation path")]
    BadRequest(#[source] NavigationError),
    #[error(transparent)]
    NotFound(NavigationError),
    #[error("Something went wrong")]
    UnexpectedError(#[source] NavigationError),
}

impl From<NavigationError> for AdminPageError {
    fn from(e: NavigationError) -> Self {
        match e {
            NavigationError::InvalidPath(_) => AdminPageError::BadRequest(e),
            NavigationError::NotFound(_) => AdminPageError::NotFound(e),
            NavigationError::TooManyRedirects { .. } | NavigationError::LoadFailed { .. } => {
                AdminPageError::UnexpectedError(e)
            }
        }
    }
}

impl std::fmt::Debug for AdminPageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl actix_web::error::ResponseError for AdminPageError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AdminPageError::MethodNotAllowed => HttpResponse::MethodNotAllowed()
                .insert_header((ALLOW, "GET"))
                .finish(),
            AdminPageError::NotFound(e) => HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(format!(
                    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Page not found</title>
</head>
<body>
    <p><i>{}</i></p>
</body>
</html>"#,
                    e
                )),
            AdminPageError::BadRequest(_) | AdminPageError::UnexpectedError(_) => {
                HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(self.to_string())
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AdminPageError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AdminPageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AdminPageError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminPageError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
