//! 메뉴 항목 API 핸들러 (`/food-item`)

use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::food_items::request::AddFoodItemRequest;
use crate::services::food_items::food_item_service::FoodItemService;

#[put("")]
pub async fn add_food_item(
    payload: web::Json<AddFoodItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FoodItemService::instance();
    let response = service.add_food_item(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{food_item_id}")]
pub async fn get_food_item(
    food_item_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = FoodItemService::instance();
    let item = service.get_food_item(&food_item_id).await?;

    Ok(HttpResponse::Ok().json(item))
}
