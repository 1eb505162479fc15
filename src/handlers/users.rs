//! 고객 API 핸들러 (`/user`)

use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::services::users::user_service::UserService;

#[put("")]
pub async fn register_user(
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.register_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
