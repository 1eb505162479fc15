//! # 주문 서비스 구현
//!
//! ## 주문 접수
//!
//! 접수 규칙은 [`acceptance::accept_order`]에 있습니다. 이 서비스는 접수 결과를 저장합니다.
//!
//! 1. 레스토랑, 고객, 모든 메뉴 항목이 존재하는지 확인 (하나라도 없으면 404)
//! 2. 항목 참조마다 수량 1 차감, 가격 합산 (같은 항목을 두 번 참조하면 두 번 차감)
//! 3. 변경된 메뉴 항목 저장, 이어서 주문을 `Accepted` 상태로 저장
//!
//! 수량 차감은 읽기-수정-저장이므로 동시 주문 간 경합이 있을 수 있습니다.
//! 저장은 트랜잭션이 아닙니다. 메뉴 항목 저장 도중이나 주문 저장에서 실패하면
//! 이미 저장된 항목의 수량은 차감된 채로 남고 주문은 생기지 않습니다.
//!
//! ## 라이더 배정
//!
//! [`DispatchService::assign_rider`]로 고른 라이더를 기록하고 `Ready` 상태로 저장합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::orders::{
            request::PlaceOrderRequest,
            response::{OrderResponse, OrdersByRiderResponse, OrdersByUserResponse, PlacedOrderResponse},
        },
        entities::{Entity, Order},
    },
    repositories::{
        food_items::food_item_repo::FoodItemRepository,
        orders::order_repo::OrderRepository,
        DocumentRepository,
    },
    services::{
        assembler::assembler_service::AssemblerService,
        dispatch::dispatch_service::DispatchService,
    },
    utils::string_utils::{parse_object_id, parse_object_ids},
};
use super::acceptance::{self, AcceptedOrder};

#[service(name = "order")]
pub struct OrderService {
    order_repo: Arc<OrderRepository>,
    food_item_repo: Arc<FoodItemRepository>,
    dispatch: Arc<DispatchService>,
    assembler: Arc<AssemblerService>,
}

impl OrderService {
    /// 클라이언트가 라이더를 지정할 수 없습니다. 접수된 주문은 항상 라이더가 비어 있습니다.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> AppResult<PlacedOrderResponse> {
        let restaurant_id = parse_object_id(&request.restaurant, "레스토랑")?;
        let user_id = parse_object_id(&request.user, "고객")?;
        let item_ids = parse_object_ids(&request.items, "메뉴 항목")?;

        let AcceptedOrder { order, consumed } =
            acceptance::accept_order(self.assembler.as_ref(), restaurant_id, user_id, item_ids).await?;

        for item in consumed {
            self.food_item_repo.save(item).await?;
        }

        let amount = order.amount_or_zero();
        let saved = self.order_repo.save(order).await?;

        log::info!("🧾 주문 접수: {} (금액 {:.2})", saved.id_string().unwrap_or_default(), amount);

        Ok(PlacedOrderResponse::from(saved))
    }

    pub async fn get_order(&self, order_id: &str) -> AppResult<OrderResponse> {
        let order = self.find_order(order_id).await?;
        self.assembler.order_response(&order).await
    }

    /// 가장 가까운 라이더를 배정합니다. 이미 배정된 주문도 다시 배정합니다.
    pub async fn assign_rider(&self, order_id: &str) -> AppResult<OrderResponse> {
        let mut order = self.find_order(order_id).await?;

        let rider = self.dispatch.assign_rider(&mut order).await?;
        let saved = self.order_repo.save(order).await?;

        log::info!("🛵 주문 {}에 라이더 {} 배정", order_id, rider.username);

        self.assembler.order_response(&saved).await
    }

    pub async fn orders_by_user(&self, user_id: &str) -> AppResult<Vec<OrdersByUserResponse>> {
        let object_id = parse_object_id(user_id, "고객")?;

        let orders = self.order_repo.find_by_user(object_id).await?;
        if orders.is_empty() {
            return Err(AppError::NotFound("고객의 주문 내역이 없습니다".to_string()));
        }

        self.assembler.orders_by_user(&orders).await
    }

    pub async fn orders_by_rider(&self, rider_id: &str) -> AppResult<Vec<OrdersByRiderResponse>> {
        let object_id = parse_object_id(rider_id, "라이더")?;

        let orders = self.order_repo.find_by_rider(object_id).await?;
        if orders.is_empty() {
            return Err(AppError::NotFound("라이더의 주문 내역이 없습니다".to_string()));
        }

        self.assembler.orders_by_rider(&orders).await
    }

    async fn find_order(&self, order_id: &str) -> AppResult<Order> {
        let object_id = parse_object_id(order_id, "주문")?;

        self.order_repo
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("주문을 찾을 수 없습니다".to_string()))
    }
}
