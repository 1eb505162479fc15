//! # Application Error Types
//!
//! 배달 백엔드 전역에서 사용하는 에러 타입을 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 HTTP 에러 응답이 만들어지도록 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | 그 외 | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let rider = rider_repo
//!     .find_by_id(&rider_id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("라이더를 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// ### 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 실패
/// - `ExternalServiceError`: 거리 계산 API 등 외부 호출 실패
///
/// ### 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패 (잘못된 ObjectId 포함)
/// - `NotFound`: 요청된 엔티티가 없거나 조회 결과가 비어 있음
///
/// ### 시스템 계층 에러
/// - `InternalError`: 비밀번호 해싱 실패 등 예상하지 못한 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 조회/저장 중 발생한 오류입니다. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 요청 본문 검증 실패, 잘못된 ObjectId 형식 등. 400으로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 존재하지 않는 엔티티 조회, 비어 있는 조회 결과(주문 이력 등),
    /// 배정 가능한 라이더가 없는 경우에 사용됩니다. 404로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 외부 서비스 에러
    ///
    /// 거리 계산 API에 연결할 수 없거나 응답 형식이 잘못된 경우입니다.
    /// 재시도나 대체 선택 없이 그대로 요청 실패로 전파됩니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 `AppError` 변형을 HTTP 상태 코드와 `{"error": "..."}` 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Order not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("distance matrix unreachable".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, &str> = Ok(7);
        let value = result.with_context(|| panic!("should not be evaluated"));

        assert_eq!(value.unwrap(), 7);
    }
}
