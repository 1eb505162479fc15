//! # 배정 서비스 구현
//!
//! 후보 전체를 저장소에서 읽고, 거리 계산 API를 한 번 호출한 뒤
//! [`selection`](super::selection) 규칙으로 고릅니다.
//!
//! API 클라이언트는 구체 타입 [`DistanceMatrixClient`]로 주입됩니다.
//! 선택 규칙은 [`DistanceOracle`](crate::distance::DistanceOracle)을 받는 함수이므로
//! 테스트에서는 고정 응답 oracle로 검증합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::AppResult,
    distance::DistanceMatrixClient,
    domain::{
        dto::restaurants::request::RestaurantsWithinQuery,
        entities::{Order, Restaurant, Rider},
    },
    repositories::{
        restaurants::restaurant_repo::RestaurantRepository,
        riders::rider_repo::RiderRepository,
        users::user_repo::UserRepository,
        DocumentRepository,
    },
};
use super::selection;

#[service(name = "dispatch")]
pub struct DispatchService {
    restaurant_repo: Arc<RestaurantRepository>,
    rider_repo: Arc<RiderRepository>,
    user_repo: Arc<UserRepository>,
    oracle: Arc<DistanceMatrixClient>,
}

impl DispatchService {
    /// 주문한 레스토랑에서 가장 빨리 도착하는 라이더를 `order`에 배정합니다.
    ///
    /// 모든 라이더가 후보입니다 (비활성, 위치 미보고 포함).
    /// 저장은 호출자가 합니다.
    pub async fn assign_rider(&self, order: &mut Order) -> AppResult<Rider> {
        let restaurant = self.restaurant_repo.find_by_id(order.restaurant).await?;
        let riders = self.rider_repo.find_all().await?;
        log::info!("🛵 라이더 배정 후보 {}명", riders.len());

        let rider = selection::assign_nearest(self.oracle.as_ref(), order, restaurant.as_ref(), riders).await?;
        log::info!("🛵 가장 가까운 라이더: {}", rider.username);

        Ok(rider)
    }

    /// 고객 주소에서 `query.time`분 안에 도착하는 레스토랑 (저장소 순서)
    pub async fn deliverable_restaurants(&self, user_id: ObjectId, query: RestaurantsWithinQuery) -> AppResult<Vec<Restaurant>> {
        let user = self.user_repo.find_by_id(user_id).await?;
        let restaurants = self.restaurant_repo.find_all().await?;
        log::debug!("배달 가능 레스토랑 검색: 후보 {}곳, 제한 {}분", restaurants.len(), query.time);

        selection::deliverable_restaurants(self.oracle.as_ref(), user.as_ref(), restaurants, query).await
    }
}
