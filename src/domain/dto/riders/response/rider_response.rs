use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, Location, Rider};

/// 라이더 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderResponse {
    pub id: String,
    pub username: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub cur_loc: Option<Location>,
}

impl From<Rider> for RiderResponse {
    fn from(rider: Rider) -> Self {
        let id = rider.id_string().unwrap_or_default();
        let Rider { username, is_active, cur_loc, .. } = rider;

        Self { id, username, is_active, cur_loc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rider_response_shape() {
        let rider = Rider::new("jun".to_string(), "hash".to_string(), true, Some(Location::new(1.0, 2.0)));
        let value = serde_json::to_value(RiderResponse::from(rider)).unwrap();

        assert_eq!(value["isActive"], true);
        assert_eq!(value["cur_loc"]["long"], 2.0);
        assert!(value.get("password").is_none());
    }
}
