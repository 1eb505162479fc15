//! 주문 API 핸들러 (`/order`)

use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::orders::request::PlaceOrderRequest;
use crate::services::orders::order_service::OrderService;

#[put("")]
pub async fn place_order(
    payload: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = OrderService::instance();
    let order = service.place_order(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(order))
}

/// 가장 가까운 라이더를 배정하고 확장된 주문을 반환합니다.
#[get("/assign/{order_id}")]
pub async fn assign_rider(
    order_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let order = service.assign_rider(&order_id).await?;

    Ok(HttpResponse::Ok().json(order))
}

#[get("/user/{user_id}")]
pub async fn orders_by_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let orders = service.orders_by_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(orders))
}

#[get("/rider/{rider_id}")]
pub async fn orders_by_rider(
    rider_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let orders = service.orders_by_rider(&rider_id).await?;

    Ok(HttpResponse::Ok().json(orders))
}

#[get("/{order_id}")]
pub async fn get_order(
    order_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let order = service.get_order(&order_id).await?;

    Ok(HttpResponse::Ok().json(order))
}
