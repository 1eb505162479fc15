//! 참조 확장 규칙
//!
//! 조회 수단은 [`ReferenceLookup`]으로 받습니다. 운영에서는
//! [`AssemblerService`](super::assembler_service::AssemblerService)가 리포지토리로 구현하고,
//! 테스트에서는 메모리 맵으로 구현합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::dto::{
    food_items::response::FoodItemResponse,
    orders::response::OrderResponse,
    restaurants::response::RestaurantResponse,
    riders::response::RiderResponse,
    users::response::UserResponse,
};
use crate::domain::entities::{FoodItem, Order, Restaurant, Rider, User};

/// ID로 엔티티 한 건 조회
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    async fn user(&self, id: ObjectId) -> AppResult<Option<User>>;

    async fn restaurant(&self, id: ObjectId) -> AppResult<Option<Restaurant>>;

    async fn rider(&self, id: ObjectId) -> AppResult<Option<Rider>>;

    async fn food_item(&self, id: ObjectId) -> AppResult<Option<FoodItem>>;
}

/// 메뉴 항목 ID 목록을 순서대로 확장합니다. 없는 항목은 빠지고 중복 ID는 중복 항목이 됩니다.
pub async fn expand_food_items<L>(lookup: &L, ids: &[ObjectId]) -> AppResult<Vec<FoodItemResponse>>
where
    L: ReferenceLookup + ?Sized,
{
    let mut items = Vec::with_capacity(ids.len());

    for id in ids {
        match lookup.food_item(*id).await? {
            Some(item) => items.push(FoodItemResponse::from(item)),
            None => log::warn!("⚠️ 메뉴 항목 참조가 끊어졌습니다: {}", id.to_hex()),
        }
    }

    Ok(items)
}

pub async fn expand_restaurant<L>(lookup: &L, restaurant: Restaurant) -> AppResult<RestaurantResponse>
where
    L: ReferenceLookup + ?Sized,
{
    let menu = expand_food_items(lookup, &restaurant.menu).await?;
    Ok(RestaurantResponse::new(restaurant, menu))
}

/// 주문의 고객, 레스토랑(메뉴 포함), 라이더, 항목을 확장합니다.
///
/// 고객/레스토랑/라이더 문서가 없으면 해당 필드는 `None`입니다.
pub async fn expand_order<L>(lookup: &L, order: &Order) -> AppResult<OrderResponse>
where
    L: ReferenceLookup + ?Sized,
{
    let user = lookup.user(order.user).await?.map(UserResponse::from);
    if user.is_none() {
        log::warn!("⚠️ 주문의 고객 참조가 끊어졌습니다: {}", order.user.to_hex());
    }

    let restaurant = match lookup.restaurant(order.restaurant).await? {
        Some(restaurant) => Some(expand_restaurant(lookup, restaurant).await?),
        None => {
            log::warn!("⚠️ 주문의 레스토랑 참조가 끊어졌습니다: {}", order.restaurant.to_hex());
            None
        }
    };

    let rider = match order.rider {
        Some(rider_id) => lookup.rider(rider_id).await?.map(RiderResponse::from),
        None => None,
    };

    let items = expand_food_items(lookup, &order.items).await?;

    Ok(OrderResponse::assemble(order, user, restaurant, rider, items))
}
