//! Rider Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 위경도 좌표
///
/// 라이더 위치 갱신 요청 본문으로도 그대로 사용되므로 범위 검증을 포함합니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0, message = "위도는 -90 ~ 90 사이여야 합니다"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "경도는 -180 ~ 180 사이여야 합니다"))]
    pub long: f64,
}

impl Location {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// 거리 계산 API의 목적지 형식 (`"lat,long"`)
    pub fn to_destination(&self) -> String {
        format!("{},{}", self.lat, self.long)
    }
}

fn default_active() -> bool {
    true
}

/// 배달 라이더 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
    /// 마지막으로 보고된 위치 (등록 직후에는 없을 수 있음)
    #[serde(default)]
    pub cur_loc: Option<Location>,
}

impl Rider {
    pub fn new(username: String, password_hash: String, is_active: bool, cur_loc: Option<Location>) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            is_active,
            cur_loc,
        }
    }

    /// 거리 계산 API에 보낼 목적지 문자열
    ///
    /// 위치가 없는 라이더도 후보에서 제외하지 않으며, 빈 목적지로 전송됩니다.
    /// API는 빈 목적지에 대해 소요 시간을 돌려주지 않으므로 해당 호출은
    /// 외부 서비스 에러로 끝납니다.
    pub fn destination(&self) -> String {
        self.cur_loc
            .map(|loc| loc.to_destination())
            .unwrap_or_default()
    }

    pub fn update_location(&mut self, loc: Location) {
        self.cur_loc = Some(loc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_destination_format() {
        let loc = Location::new(37.5665, 126.978);
        assert_eq!(loc.to_destination(), "37.5665,126.978");
    }

    #[test]
    fn test_rider_without_location_has_empty_destination() {
        let rider = Rider::new("jun".to_string(), "hash".to_string(), true, None);
        assert_eq!(rider.destination(), "");
    }

    #[test]
    fn test_rider_defaults_active_when_missing() {
        let json = r#"{"username": "jun", "password": "hash"}"#;
        let rider: Rider = serde_json::from_str(json).unwrap();

        assert!(rider.is_active);
        assert!(rider.cur_loc.is_none());
    }

    #[test]
    fn test_rider_uses_stored_field_names() {
        let mut rider = Rider::new("jun".to_string(), "hash".to_string(), false, None);
        rider.update_location(Location::new(1.5, 2.5));
        let value = serde_json::to_value(&rider).unwrap();

        assert_eq!(value["isActive"], false);
        assert_eq!(value["cur_loc"]["lat"], 1.5);
        assert_eq!(value["cur_loc"]["long"], 2.5);
    }

    #[test]
    fn test_location_range_validation() {
        assert!(Location::new(37.0, 127.0).validate().is_ok());
        assert!(Location::new(91.0, 127.0).validate().is_err());
        assert!(Location::new(37.0, -181.0).validate().is_err());
    }
}
