//! Order Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 주문 엔티티
///
/// `rider`는 라이더 배정 전까지 비어 있고, `amount`와 `status`는 주문 접수 시 채워집니다.
/// 상태 값은 자유 문자열이며 현재 사용하는 값은 [`Order::STATUS_ACCEPTED`],
/// [`Order::STATUS_READY`] 두 가지입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub restaurant: ObjectId,
    pub user: ObjectId,
    #[serde(default)]
    pub rider: Option<ObjectId>,
    #[serde(default)]
    pub items: Vec<ObjectId>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Order {
    pub const STATUS_ACCEPTED: &'static str = "Accepted";
    pub const STATUS_READY: &'static str = "Ready";

    pub fn new(restaurant: ObjectId, user: ObjectId, rider: Option<ObjectId>, items: Vec<ObjectId>) -> Self {
        Self {
            id: None,
            restaurant,
            user,
            rider,
            items,
            amount: None,
            status: None,
        }
    }

    /// 주문 접수: 금액 확정 후 `Accepted` 상태로 전환
    pub fn accept(&mut self, amount: f64) {
        self.amount = Some(amount);
        self.status = Some(Self::STATUS_ACCEPTED.to_string());
    }

    /// 라이더 배정: `Ready` 상태로 전환
    pub fn assign_rider(&mut self, rider_id: ObjectId) {
        self.rider = Some(rider_id);
        self.status = Some(Self::STATUS_READY.to_string());
    }

    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or_default()
    }

    pub fn status_or_empty(&self) -> String {
        self.status.clone().unwrap_or_default()
    }
}
