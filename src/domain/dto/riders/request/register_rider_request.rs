//! # 라이더 등록 요청 DTO
//!
//! `PUT /rider` 본문입니다. 위치 갱신(`PUT /rider/location/{id}`)은 별도 DTO 없이
//! [`Location`](crate::domain::entities::Location)을 그대로 본문으로 받습니다.
//!
//! ```json
//! { "username": "jun", "password": "secret", "isActive": true, "cur_loc": { "lat": 37.55, "long": 126.97 } }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::Location;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRiderRequest {
    #[validate(length(min = 1, max = 50, message = "사용자명은 1-50자 사이여야 합니다"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    #[validate(nested)]
    pub cur_loc: Option<Location>,
}
