//! # HTTP Handlers
//!
//! 요청 본문 검증 후 서비스 싱글톤(`XService::instance()`)에 위임합니다.
//! 에러는 모두 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현으로 응답됩니다.

pub mod status;
pub mod users;
pub mod riders;
pub mod food_items;
pub mod restaurants;
pub mod orders;
