//! Restaurant Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 레스토랑 엔티티
///
/// `menu`는 [`FoodItem`](crate::domain::entities::FoodItem) ID 목록이며, 순서가 메뉴 표시 순서입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default)]
    pub menu: Vec<ObjectId>,
    /// 매장 주소 (라이더 배정 시 거리 계산 API 출발지)
    pub address: String,
}

impl Restaurant {
    pub fn new(name: String, password_hash: String, menu: Vec<ObjectId>, address: String) -> Self {
        Self {
            id: None,
            name,
            password_hash,
            menu,
            address,
        }
    }
}
