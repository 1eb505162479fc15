use serde::{Deserialize, Serialize};
use crate::domain::dto::food_items::response::FoodItemResponse;
use crate::domain::entities::{Entity, Restaurant};

/// 메뉴가 확장된 레스토랑 응답 DTO
///
/// `menu`는 저장된 ID 순서를 따르며, 조회되지 않은 항목은 빠져 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub menu: Vec<FoodItemResponse>,
}

impl RestaurantResponse {
    pub fn new(restaurant: Restaurant, menu: Vec<FoodItemResponse>) -> Self {
        let id = restaurant.id_string().unwrap_or_default();
        let Restaurant { name, address, .. } = restaurant;

        Self { id, name, address, menu }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FoodItem;

    #[test]
    fn test_restaurant_response_keeps_menu_and_hides_password() {
        let restaurant = Restaurant::new("Hansik".to_string(), "hash".to_string(), vec![], "Seoul".to_string());
        let menu = vec![FoodItemResponse::from(FoodItem::new("Bibimbap".to_string(), 9.0, 4))];

        let value = serde_json::to_value(RestaurantResponse::new(restaurant, menu)).unwrap();

        assert_eq!(value["menu"][0]["name"], "Bibimbap");
        assert!(value.get("password").is_none());
    }
}
