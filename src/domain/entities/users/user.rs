//! User Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 고객 엔티티
///
/// `password` 필드에는 bcrypt 해시만 저장됩니다. API 응답으로 내보낼 때는
/// 항상 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// 배송지 주소 (거리 계산 API 출발지)
    pub address: String,
    /// 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl User {
    pub fn new(username: String, address: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            address,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_hash_under_password_field() {
        let user = User::new("minji".to_string(), "Seoul Mapo-gu".to_string(), "$2b$04$hash".to_string());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["password"], "$2b$04$hash");
        assert!(value.get("password_hash").is_none());
        assert!(value.get("_id").is_none());
    }
}
