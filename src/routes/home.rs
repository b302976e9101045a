use actix_web::HttpResponse;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Real Estate Admin up",
    }))
}
