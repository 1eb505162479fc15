//! # 고객 등록 요청 DTO
//!
//! `PUT /user` 본문입니다.
//!
//! ```json
//! { "username": "minji", "address": "Seoul Mapo-gu", "password": "secret" }
//! ```
//!
//! 비밀번호는 서비스 계층에서 bcrypt 해시로 바뀐 뒤 저장됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50, message = "사용자명은 1-50자 사이여야 합니다"))]
    pub username: String,

    /// 배송지 주소. 거리 계산 API 출발지로 그대로 전달됩니다.
    #[validate(length(min = 1, message = "주소는 필수입니다"))]
    pub address: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = RegisterUserRequest {
            username: "minji".to_string(),
            address: "Seoul Mapo-gu".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_address_rejected() {
        let request = RegisterUserRequest {
            username: "minji".to_string(),
            address: String::new(),
            password: "secret".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }
}
