//! # 문자열 유틸리티
//!
//! 요청 입력 정리와 ObjectId 파싱처럼 여러 서비스가 공유하는 문자열 처리 함수입니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 16진수 문자열을 `ObjectId`로 변환합니다.
///
/// 경로 파라미터와 요청 본문의 참조 ID에 공통으로 사용합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 {} ID 형식입니다: {}", field_name, value)))
}

/// 여러 ID 문자열을 순서대로 변환합니다. 하나라도 잘못되면 실패합니다.
pub fn parse_object_ids(values: &[String], field_name: &str) -> Result<Vec<ObjectId>, AppError> {
    values
        .iter()
        .map(|value| parse_object_id(value, field_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Gangnam-gu", "address").unwrap(), "Gangnam-gu");
        assert_eq!(validate_required_string("  Mapo-gu  ", "address").unwrap(), "Mapo-gu");

        assert!(validate_required_string("", "address").is_err());
        assert!(validate_required_string("   ", "address").is_err());
        assert!(validate_required_string("\t\n", "address").is_err());
    }

    #[test]
    fn test_parse_object_id() {
        let id = parse_object_id("507f1f77bcf86cd799439011", "order").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");

        let padded = parse_object_id(" 507f1f77bcf86cd799439011 ", "order").unwrap();
        assert_eq!(padded, id);
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        match parse_object_id("not-an-id", "rider") {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("rider")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_object_ids_keeps_order() {
        let raw = vec![
            "507f1f77bcf86cd799439011".to_string(),
            "507f191e810c19729de860ea".to_string(),
        ];
        let ids = parse_object_ids(&raw, "food item").unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].to_hex(), raw[0]);
        assert_eq!(ids[1].to_hex(), raw[1]);
    }

    #[test]
    fn test_parse_object_ids_fails_on_any_invalid() {
        let raw = vec!["507f1f77bcf86cd799439011".to_string(), "bad".to_string()];
        assert!(parse_object_ids(&raw, "food item").is_err());
    }
}
