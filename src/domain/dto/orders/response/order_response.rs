//! # 주문 응답 DTO
//!
//! 주문 문서는 다른 엔티티를 ID로만 참조합니다. API로 내보낼 때는
//! 참조를 풀어 중첩 객체로 만든 [`OrderResponse`]를 사용하고, 이력 조회에서는
//! 조회 기준이 된 쪽을 뺀 뷰를 사용합니다.
//!
//! | 타입 | 사용처 | 빠지는 필드 |
//! |------|--------|-------------|
//! | [`OrderResponse`] | `GET /order/{id}`, 라이더 배정 | - |
//! | [`OrdersByUserResponse`] | `GET /order/user/{id}` | `user` |
//! | [`OrdersByRiderResponse`] | `GET /order/rider/{id}` | `rider` |
//! | [`PlacedOrderResponse`] | `PUT /order` | 확장 없음 (저장된 문서 그대로) |

use serde::{Deserialize, Serialize};
use crate::domain::dto::food_items::response::FoodItemResponse;
use crate::domain::dto::restaurants::response::RestaurantResponse;
use crate::domain::dto::riders::response::RiderResponse;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::{Entity, Order};

/// 참조가 모두 확장된 주문
///
/// 참조 대상 문서가 없으면 해당 필드는 `null`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user: Option<UserResponse>,
    pub restaurant: Option<RestaurantResponse>,
    pub rider: Option<RiderResponse>,
    pub items: Vec<FoodItemResponse>,
    pub amount: f64,
    pub status: String,
}

impl OrderResponse {
    pub fn assemble(
        order: &Order,
        user: Option<UserResponse>,
        restaurant: Option<RestaurantResponse>,
        rider: Option<RiderResponse>,
        items: Vec<FoodItemResponse>,
    ) -> Self {
        Self {
            id: order.id_string().unwrap_or_default(),
            user,
            restaurant,
            rider,
            items,
            amount: order.amount_or_zero(),
            status: order.status_or_empty(),
        }
    }
}

/// 고객별 주문 이력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersByUserResponse {
    pub id: String,
    pub restaurant: Option<RestaurantResponse>,
    pub rider: Option<RiderResponse>,
    pub items: Vec<FoodItemResponse>,
    pub amount: f64,
    pub status: String,
}

impl From<OrderResponse> for OrdersByUserResponse {
    fn from(order: OrderResponse) -> Self {
        let OrderResponse { id, restaurant, rider, items, amount, status, .. } = order;
        Self { id, restaurant, rider, items, amount, status }
    }
}

/// 라이더별 주문 이력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersByRiderResponse {
    pub id: String,
    pub user: Option<UserResponse>,
    pub restaurant: Option<RestaurantResponse>,
    pub items: Vec<FoodItemResponse>,
    pub amount: f64,
    pub status: String,
}

impl From<OrderResponse> for OrdersByRiderResponse {
    fn from(order: OrderResponse) -> Self {
        let OrderResponse { id, user, restaurant, items, amount, status, .. } = order;
        Self { id, user, restaurant, items, amount, status }
    }
}

/// 접수 직후 저장된 주문 (참조는 hex ID 문자열)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrderResponse {
    pub id: String,
    pub restaurant: String,
    pub user: String,
    pub rider: Option<String>,
    pub items: Vec<String>,
    pub amount: f64,
    pub status: String,
}

impl From<Order> for PlacedOrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id_string().unwrap_or_default(),
            restaurant: order.restaurant.to_hex(),
            user: order.user.to_hex(),
            rider: order.rider.map(|id| id.to_hex()),
            items: order.items.iter().map(|id| id.to_hex()).collect(),
            amount: order.amount_or_zero(),
            status: order.status_or_empty(),
        }
    }
}
