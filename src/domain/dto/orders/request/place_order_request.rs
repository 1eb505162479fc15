//! # 주문 접수 요청 DTO
//!
//! `PUT /order` 본문입니다. 같은 메뉴를 두 개 주문하려면 `items`에 ID를 두 번 넣습니다.
//! 라이더는 `GET /order/assign/{id}`로만 배정되며 본문의 `rider` 필드는 무시됩니다.
//!
//! ```json
//! {
//!   "restaurant": "665f1c2e9b1d4a0012a3b4c5",
//!   "user": "665f1c2e9b1d4a0012a3b4c6",
//!   "items": ["665f1c2e9b1d4a0012a3b4c7", "665f1c2e9b1d4a0012a3b4c7"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    pub restaurant: String,
    pub user: String,
    #[validate(length(min = 1, message = "주문 항목은 1개 이상이어야 합니다"))]
    pub items: Vec<String>,
}
