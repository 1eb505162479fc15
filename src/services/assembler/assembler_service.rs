//! # 응답 조립 서비스 구현
//!
//! 주문과 레스토랑 문서의 ID 참조를 풀어 API 응답으로 만듭니다.
//! 참조 하나당 조회 한 번을 수행합니다 (배치 조회 없음).
//!
//! | 참조 | 대상이 없을 때 |
//! |------|----------------|
//! | 주문 → 고객 / 레스토랑 / 라이더 | 해당 필드 `null` |
//! | 주문·레스토랑 → 메뉴 항목 | 목록에서 제외, `warn` 로그 |
//!
//! 확장 규칙은 [`expansion`](super::expansion)에 있고, 이 서비스는 리포지토리 조회를 제공합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::AppResult,
    domain::{
        dto::{
            orders::response::{OrderResponse, OrdersByRiderResponse, OrdersByUserResponse},
            restaurants::response::RestaurantResponse,
        },
        entities::{FoodItem, Order, Restaurant, Rider, User},
    },
    repositories::{
        food_items::food_item_repo::FoodItemRepository,
        restaurants::restaurant_repo::RestaurantRepository,
        riders::rider_repo::RiderRepository,
        users::user_repo::UserRepository,
        DocumentRepository,
    },
};
use super::expansion::{self, ReferenceLookup};

#[service(name = "assembler")]
pub struct AssemblerService {
    user_repo: Arc<UserRepository>,
    rider_repo: Arc<RiderRepository>,
    restaurant_repo: Arc<RestaurantRepository>,
    food_item_repo: Arc<FoodItemRepository>,
}

#[async_trait]
impl ReferenceLookup for AssemblerService {
    async fn user(&self, id: ObjectId) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    async fn restaurant(&self, id: ObjectId) -> AppResult<Option<Restaurant>> {
        self.restaurant_repo.find_by_id(id).await
    }

    async fn rider(&self, id: ObjectId) -> AppResult<Option<Rider>> {
        self.rider_repo.find_by_id(id).await
    }

    async fn food_item(&self, id: ObjectId) -> AppResult<Option<FoodItem>> {
        self.food_item_repo.find_by_id(id).await
    }
}

impl AssemblerService {
    pub async fn restaurant_response(&self, restaurant: Restaurant) -> AppResult<RestaurantResponse> {
        expansion::expand_restaurant(self, restaurant).await
    }

    pub async fn order_response(&self, order: &Order) -> AppResult<OrderResponse> {
        expansion::expand_order(self, order).await
    }

    pub async fn orders_by_user(&self, orders: &[Order]) -> AppResult<Vec<OrdersByUserResponse>> {
        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.order_response(order).await?.into());
        }
        Ok(responses)
    }

    pub async fn orders_by_rider(&self, orders: &[Order]) -> AppResult<Vec<OrdersByRiderResponse>> {
        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.order_response(order).await?.into());
        }
        Ok(responses)
    }
}
