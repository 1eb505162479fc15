use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, User};

/// 고객 응답 DTO
///
/// 비밀번호 해시는 구조 분해 단계에서 버려집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub address: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User { username, address, .. } = user;

        Self { id, username, address }
    }
}
