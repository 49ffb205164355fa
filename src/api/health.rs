use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": true,
            "message": "Service is up",
            "timestamp": "2026-01-01T00:00:00+00:00"
        }))
    ),
    tag = "Health"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": true,
        "message": "Service is up",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
