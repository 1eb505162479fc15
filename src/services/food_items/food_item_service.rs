//! # 메뉴 항목 서비스 구현

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::food_items::{request::AddFoodItemRequest, response::FoodItemResponse},
        entities::FoodItem,
    },
    repositories::{food_items::food_item_repo::FoodItemRepository, DocumentRepository},
    utils::string_utils::parse_object_id,
};

#[service(name = "fooditem")]
pub struct FoodItemService {
    food_item_repo: Arc<FoodItemRepository>,
}

impl FoodItemService {
    pub async fn add_food_item(&self, request: AddFoodItemRequest) -> AppResult<FoodItemResponse> {
        let saved = self.food_item_repo.save(FoodItem::from(request)).await?;
        log::info!("메뉴 항목 추가: {} (qty={})", saved.name, saved.qty);

        Ok(FoodItemResponse::from(saved))
    }

    pub async fn get_food_item(&self, food_item_id: &str) -> AppResult<FoodItemResponse> {
        let object_id = parse_object_id(food_item_id, "메뉴 항목")?;

        self.food_item_repo
            .find_by_id(object_id)
            .await?
            .map(FoodItemResponse::from)
            .ok_or_else(|| AppError::NotFound("메뉴 항목을 찾을 수 없습니다".to_string()))
    }
}
