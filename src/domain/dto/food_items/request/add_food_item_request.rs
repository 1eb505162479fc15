//! # 메뉴 항목 추가 요청 DTO
//!
//! `PUT /food-item` 본문입니다. 수량은 이후 주문 접수 때마다 1씩 줄어듭니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::FoodItem;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddFoodItemRequest {
    #[validate(length(min = 1, max = 100, message = "메뉴 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    pub qty: i64,
}

impl From<AddFoodItemRequest> for FoodItem {
    fn from(request: AddFoodItemRequest) -> Self {
        FoodItem::new(request.name, request.price, request.qty)
    }
}
