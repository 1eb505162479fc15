//! 주문 접수 규칙
//!
//! 레스토랑, 고객, 참조된 모든 메뉴 항목이 있어야 접수됩니다.
//! 항목 참조마다 수량을 1 줄이고 가격을 더합니다. 같은 항목을 두 번 참조하면 두 번 줄어듭니다.
//! 접수된 주문은 라이더 없이 `Accepted` 상태입니다.

use std::collections::HashMap;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{FoodItem, Order};
use crate::services::assembler::ReferenceLookup;

/// 저장 전의 접수 결과
#[derive(Debug)]
pub struct AcceptedOrder {
    pub order: Order,
    /// 수량이 바뀐 메뉴 항목 (첫 참조 순서, 항목당 하나)
    pub consumed: Vec<FoodItem>,
}

/// 참조 순서대로 수량을 차감하고 총액을 반환합니다.
///
/// `stock`에 없는 참조는 건너뜁니다.
fn consume_references(stock: &mut HashMap<ObjectId, FoodItem>, references: &[ObjectId]) -> f64 {
    let mut amount = 0.0;
    for id in references {
        if let Some(item) = stock.get_mut(id) {
            amount += item.consume_one();
        }
    }
    amount
}

/// 중복을 제거한 ID 목록 (첫 등장 순서)
fn distinct_ids(ids: &[ObjectId]) -> Vec<ObjectId> {
    let mut distinct: Vec<ObjectId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !distinct.contains(id) {
            distinct.push(*id);
        }
    }
    distinct
}

pub async fn accept_order<L>(
    lookup: &L,
    restaurant_id: ObjectId,
    user_id: ObjectId,
    item_ids: Vec<ObjectId>,
) -> AppResult<AcceptedOrder>
where
    L: ReferenceLookup + ?Sized,
{
    if lookup.restaurant(restaurant_id).await?.is_none() {
        return Err(AppError::NotFound("레스토랑을 찾을 수 없습니다".to_string()));
    }
    if lookup.user(user_id).await?.is_none() {
        return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
    }

    let distinct = distinct_ids(&item_ids);
    let mut stock = HashMap::with_capacity(distinct.len());
    for id in &distinct {
        let item = lookup
            .food_item(*id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("메뉴 항목을 찾을 수 없습니다: {}", id.to_hex())))?;
        stock.insert(*id, item);
    }

    let amount = consume_references(&mut stock, &item_ids);
    let consumed = distinct.iter().filter_map(|id| stock.remove(id)).collect();

    let mut order = Order::new(restaurant_id, user_id, None, item_ids);
    order.accept(amount);

    Ok(AcceptedOrder { order, consumed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::orders::request::PlaceOrderRequest;
    use crate::domain::entities::{Restaurant, User};
    use crate::services::assembler::expansion::memory::MemoryLookup;
    use crate::utils::string_utils::{parse_object_id, parse_object_ids};

    struct Shop {
        lookup: MemoryLookup,
        restaurant_id: ObjectId,
        user_id: ObjectId,
        bibimbap: ObjectId,
        kimchi: ObjectId,
    }

    fn shop() -> Shop {
        let mut lookup = MemoryLookup::default();
        let bibimbap = lookup.add_food_item(FoodItem::new("Bibimbap".to_string(), 5.0, 10)).id.unwrap();
        let kimchi = lookup.add_food_item(FoodItem::new("Kimchi".to_string(), 3.5, 2)).id.unwrap();
        let restaurant_id = lookup
            .add_restaurant(Restaurant::new("Hansik".to_string(), "hash".to_string(), vec![bibimbap, kimchi], "Seoul".to_string()))
            .id
            .unwrap();
        let user_id = lookup
            .add_user(User::new("minji".to_string(), "Seoul Mapo-gu".to_string(), "hash".to_string()))
            .id
            .unwrap();

        Shop { lookup, restaurant_id, user_id, bibimbap, kimchi }
    }

    #[actix_web::test]
    async fn test_accepting_order_decrements_each_item_and_sums_prices() {
        let shop = shop();

        let accepted = accept_order(&shop.lookup, shop.restaurant_id, shop.user_id, vec![shop.bibimbap, shop.kimchi])
            .await
            .unwrap();

        assert_eq!(accepted.order.amount, Some(8.5));
        assert_eq!(accepted.order.status.as_deref(), Some("Accepted"));
        let quantities: Vec<i64> = accepted.consumed.iter().map(|item| item.qty).collect();
        assert_eq!(quantities, vec![9, 1]);
    }

    #[actix_web::test]
    async fn test_client_supplied_rider_is_ignored() {
        let shop = shop();
        let body = serde_json::json!({
            "restaurant": shop.restaurant_id.to_hex(),
            "user": shop.user_id.to_hex(),
            "rider": ObjectId::new().to_hex(),
            "items": [shop.bibimbap.to_hex()]
        });
        let request: PlaceOrderRequest = serde_json::from_value(body).unwrap();

        let accepted = accept_order(
            &shop.lookup,
            parse_object_id(&request.restaurant, "restaurant").unwrap(),
            parse_object_id(&request.user, "user").unwrap(),
            parse_object_ids(&request.items, "item").unwrap(),
        )
        .await
        .unwrap();

        assert!(accepted.order.rider.is_none());
        assert_eq!(accepted.order.status.as_deref(), Some("Accepted"));
    }

    #[actix_web::test]
    async fn test_repeated_reference_decrements_twice() {
        let shop = shop();

        let accepted = accept_order(&shop.lookup, shop.restaurant_id, shop.user_id, vec![shop.kimchi, shop.kimchi, shop.kimchi])
            .await
            .unwrap();

        assert_eq!(accepted.order.amount, Some(10.5));
        assert_eq!(accepted.consumed.len(), 1);
        assert_eq!(accepted.consumed[0].qty, -1);
        assert_eq!(accepted.order.items.len(), 3);
    }

    #[actix_web::test]
    async fn test_missing_restaurant_is_not_found() {
        let shop = shop();

        let result = accept_order(&shop.lookup, ObjectId::new(), shop.user_id, vec![shop.bibimbap]).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("레스토랑")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_missing_user_is_not_found() {
        let shop = shop();

        let result = accept_order(&shop.lookup, shop.restaurant_id, ObjectId::new(), vec![shop.bibimbap]).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("사용자")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_missing_item_is_not_found_and_consumes_nothing() {
        let shop = shop();
        let missing = ObjectId::new();

        let result = accept_order(&shop.lookup, shop.restaurant_id, shop.user_id, vec![shop.bibimbap, missing]).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains(&missing.to_hex())),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(shop.lookup.food_items[&shop.bibimbap].qty, 10);
    }

    #[test]
    fn test_distinct_ids_keep_first_appearance_order() {
        let a = ObjectId::new();
        let b = ObjectId::new();

        assert_eq!(distinct_ids(&[b, a, b, a]), vec![b, a]);
    }
}
