use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, FoodItem};

/// 메뉴 항목 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItemResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub qty: i64,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id_string().unwrap_or_default(),
            name: item.name,
            price: item.price,
            qty: item.qty,
        }
    }
}
