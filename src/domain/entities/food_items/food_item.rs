//! FoodItem Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 메뉴 항목 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    /// 남은 수량. 주문 접수 시 하한 검사 없이 차감되므로 음수가 될 수 있습니다.
    pub qty: i64,
}

impl FoodItem {
    pub fn new(name: String, price: f64, qty: i64) -> Self {
        Self {
            id: None,
            name,
            price,
            qty,
        }
    }

    /// 주문 한 건에 대해 수량을 1 차감하고 가격을 반환합니다.
    pub fn consume_one(&mut self) -> f64 {
        self.qty -= 1;
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepting_two_items_decrements_and_sums() {
        let mut items = vec![
            FoodItem::new("Bibimbap".to_string(), 5.0, 10),
            FoodItem::new("Kimchi".to_string(), 3.5, 2),
        ];

        let amount: f64 = items.iter_mut().map(FoodItem::consume_one).sum();

        assert_eq!(items[0].qty, 9);
        assert_eq!(items[1].qty, 1);
        assert_eq!(amount, 8.5);
    }

    #[test]
    fn test_consume_one_goes_negative() {
        let mut item = FoodItem::new("Tteokbokki".to_string(), 4.0, 0);

        assert_eq!(item.consume_one(), 4.0);
        assert_eq!(item.qty, -1);
    }
}
