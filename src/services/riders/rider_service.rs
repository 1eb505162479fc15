//! # 라이더 서비스 구현

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::riders::{request::RegisterRiderRequest, response::RiderResponse},
        entities::{Location, Rider},
    },
    repositories::{riders::rider_repo::RiderRepository, DocumentRepository},
    services::credentials::hash_password,
    utils::string_utils::{parse_object_id, validate_required_string},
};

#[service(name = "rider")]
pub struct RiderService {
    rider_repo: Arc<RiderRepository>,
}

impl RiderService {
    pub async fn register_rider(&self, request: RegisterRiderRequest) -> AppResult<RiderResponse> {
        let username = validate_required_string(&request.username, "사용자명")?;
        let password_hash = hash_password(&request.password)?;
        let rider = Rider::new(username, password_hash, request.is_active, request.cur_loc);

        let saved = self.rider_repo.save(rider).await?;
        log::info!("라이더 등록 완료: {}", saved.username);

        Ok(RiderResponse::from(saved))
    }

    pub async fn get_rider(&self, rider_id: &str) -> AppResult<RiderResponse> {
        self.find_rider(rider_id).await.map(RiderResponse::from)
    }

    /// 현재 위치를 새 좌표로 교체합니다. 이력은 남기지 않습니다.
    pub async fn update_location(&self, rider_id: &str, location: Location) -> AppResult<RiderResponse> {
        let mut rider = self.find_rider(rider_id).await?;
        rider.update_location(location);

        let saved = self.rider_repo.save(rider).await?;
        log::debug!("라이더 위치 갱신: {} → {}", rider_id, location.to_destination());

        Ok(RiderResponse::from(saved))
    }

    async fn find_rider(&self, rider_id: &str) -> AppResult<Rider> {
        let object_id = parse_object_id(rider_id, "라이더")?;

        self.rider_repo
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("라이더를 찾을 수 없습니다".to_string()))
    }
}
