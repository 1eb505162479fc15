//! 상태 확인 핸들러

use actix_web::{get, HttpResponse};
use serde_json::json;

#[get("/")]
pub async fn root_status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "running" }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "food_delivery_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "distance_matrix": "Google Distance Matrix",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
