//! # 레스토랑 등록 요청 DTO
//!
//! `PUT /restaurant` 본문입니다. `menu`는 이미 등록된 메뉴 항목 ID(24자리 hex) 목록이며,
//! 등록 시점에 존재 여부는 확인하지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRestaurantRequest {
    #[validate(length(min = 1, max = 100, message = "레스토랑 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,

    #[serde(default)]
    pub menu: Vec<String>,

    #[validate(length(min = 1, message = "주소는 필수입니다"))]
    pub address: String,
}
