//! 레스토랑 API 핸들러 (`/restaurant`)

use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::restaurants::request::{RegisterRestaurantRequest, RestaurantsWithinQuery};
use crate::services::restaurants::restaurant_service::RestaurantService;

#[put("")]
pub async fn register_restaurant(
    payload: web::Json<RegisterRestaurantRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RestaurantService::instance();
    let response = service.register_restaurant(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// `GET /restaurant/nearby/{user_id}?time=30`
///
/// 고객 주소에서 `time`분 안에 도착하는 레스토랑 목록 (메뉴 포함)
#[get("/nearby/{user_id}")]
pub async fn restaurants_within(
    user_id: web::Path<String>,
    query: web::Query<RestaurantsWithinQuery>,
) -> Result<HttpResponse, AppError> {
    let service = RestaurantService::instance();
    let restaurants = service.restaurants_within(&user_id, query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(restaurants))
}

#[get("/{restaurant_id}")]
pub async fn get_restaurant(
    restaurant_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = RestaurantService::instance();
    let restaurant = service.get_restaurant(&restaurant_id).await?;

    Ok(HttpResponse::Ok().json(restaurant))
}
