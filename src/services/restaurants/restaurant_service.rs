//! # 레스토랑 서비스 구현
//!
//! 레스토랑 등록/조회와 배달 가능 레스토랑 검색을 담당합니다.
//! 응답은 항상 메뉴가 확장된 [`RestaurantResponse`]입니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::restaurants::{
            request::{RegisterRestaurantRequest, RestaurantsWithinQuery},
            response::RestaurantResponse,
        },
        entities::Restaurant,
    },
    repositories::{
        restaurants::restaurant_repo::RestaurantRepository,
        DocumentRepository,
    },
    services::{
        assembler::assembler_service::AssemblerService,
        credentials::hash_password,
        dispatch::dispatch_service::DispatchService,
    },
    utils::string_utils::{parse_object_id, parse_object_ids, validate_required_string},
};

#[service(name = "restaurant")]
pub struct RestaurantService {
    restaurant_repo: Arc<RestaurantRepository>,
    dispatch: Arc<DispatchService>,
    assembler: Arc<AssemblerService>,
}

impl RestaurantService {
    /// 메뉴 ID 형식만 검사하고, 존재 여부는 조회 시점에 확인합니다.
    pub async fn register_restaurant(&self, request: RegisterRestaurantRequest) -> AppResult<RestaurantResponse> {
        let name = validate_required_string(&request.name, "레스토랑 이름")?;
        let address = validate_required_string(&request.address, "주소")?;
        let menu = parse_object_ids(&request.menu, "메뉴 항목")?;
        let password_hash = hash_password(&request.password)?;
        let restaurant = Restaurant::new(name, password_hash, menu, address);

        let saved = self.restaurant_repo.save(restaurant).await?;
        log::info!("레스토랑 등록 완료: {} (메뉴 {}개)", saved.name, saved.menu.len());

        self.assembler.restaurant_response(saved).await
    }

    pub async fn get_restaurant(&self, restaurant_id: &str) -> AppResult<RestaurantResponse> {
        let object_id = parse_object_id(restaurant_id, "레스토랑")?;

        let restaurant = self.restaurant_repo
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("레스토랑을 찾을 수 없습니다".to_string()))?;

        self.assembler.restaurant_response(restaurant).await
    }

    /// 고객 주소에서 `query.time`분 안에 도착하는 레스토랑
    ///
    /// 고객이 없거나 한 곳도 없으면 `NotFound`입니다.
    pub async fn restaurants_within(&self, user_id: &str, query: RestaurantsWithinQuery) -> AppResult<Vec<RestaurantResponse>> {
        let object_id = parse_object_id(user_id, "고객")?;

        let restaurants = self.dispatch.deliverable_restaurants(object_id, query).await?;

        let mut responses = Vec::with_capacity(restaurants.len());
        for restaurant in restaurants {
            responses.push(self.assembler.restaurant_response(restaurant).await?);
        }

        Ok(responses)
    }
}
