//! # 고객 서비스 구현
//!
//! 고객 등록과 조회를 담당합니다. 비밀번호는 bcrypt 해시로만 저장되고,
//! 응답에는 [`UserResponse`]만 나갑니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::RegisterUserRequest, response::UserResponse},
        entities::User,
    },
    repositories::{users::user_repo::UserRepository, DocumentRepository},
    services::credentials::hash_password,
    utils::string_utils::{parse_object_id, validate_required_string},
};

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        let username = validate_required_string(&request.username, "사용자명")?;
        let address = validate_required_string(&request.address, "주소")?;
        let password_hash = hash_password(&request.password)?;
        let user = User::new(username, address, password_hash);

        let saved = self.user_repo.save(user).await?;
        log::info!("고객 등록 완료: {} ({})", saved.username, saved.id.map(|id| id.to_hex()).unwrap_or_default());

        Ok(UserResponse::from(saved))
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        let object_id = parse_object_id(user_id, "고객")?;

        self.user_repo
            .find_by_id(object_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}
