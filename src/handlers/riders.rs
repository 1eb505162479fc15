//! 라이더 API 핸들러 (`/rider`)

use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::riders::request::RegisterRiderRequest;
use crate::domain::entities::Location;
use crate::services::riders::rider_service::RiderService;

#[put("")]
pub async fn register_rider(
    payload: web::Json<RegisterRiderRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RiderService::instance();
    let response = service.register_rider(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{rider_id}")]
pub async fn get_rider(
    rider_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = RiderService::instance();
    let rider = service.get_rider(&rider_id).await?;

    Ok(HttpResponse::Ok().json(rider))
}

/// 본문: `{ "lat": 37.55, "long": 126.97 }`
#[put("/location/{rider_id}")]
pub async fn update_rider_location(
    rider_id: web::Path<String>,
    payload: web::Json<Location>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RiderService::instance();
    let rider = service.update_location(&rider_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(rider))
}
