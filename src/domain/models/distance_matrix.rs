//! # Distance Matrix Wire Model
//!
//! 거리 계산 API(Google Distance Matrix 호환) 응답 본문을 역직렬화하는 타입입니다.
//! 출발지 하나, 목적지 N개로 호출하므로 `rows[0].elements[i]`가 i번째 목적지에 대응합니다.
//!
//! ```json
//! {
//!   "status": "OK",
//!   "rows": [
//!     { "elements": [
//!         { "status": "OK", "duration": { "value": 300, "text": "5 mins" } },
//!         { "status": "NOT_FOUND" }
//!     ] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use crate::core::errors::{AppError, AppResult};

/// 최상위 응답
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// 출발지 한 곳에 대한 결과 행
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// 출발지-목적지 한 쌍의 결과
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub duration: Option<MatrixValue>,
}

/// `{ "value": 초, "text": "표시용 문자열" }`
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixValue {
    pub value: u64,
    #[serde(default)]
    pub text: Option<String>,
}

impl DistanceMatrixResponse {
    /// 첫 번째 행에서 목적지별 소요 시간(초)을 입력 순서대로 꺼냅니다.
    ///
    /// 다음 경우는 모두 잘못된 응답으로 보고 `ExternalServiceError`를 반환합니다.
    /// - 최상위 `status`가 `OK`가 아님
    /// - 행이 없음
    /// - 원소 수가 목적지 수와 다름
    /// - 소요 시간이 없는 원소가 있음
    pub fn into_durations(self, expected: usize) -> AppResult<Vec<u64>> {
        if let Some(status) = self.status.as_deref() {
            if status != "OK" {
                return Err(AppError::ExternalServiceError(format!(
                    "거리 계산 API 오류 상태: {} ({})",
                    status,
                    self.error_message.unwrap_or_default()
                )));
            }
        }

        let row = self.rows
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalServiceError("거리 계산 API 응답에 rows가 없습니다".to_string()))?;

        if row.elements.len() != expected {
            return Err(AppError::ExternalServiceError(format!(
                "거리 계산 API 응답 원소 수 불일치: 요청 {}개, 응답 {}개",
                expected,
                row.elements.len()
            )));
        }

        row.elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                element.duration.map(|duration| duration.value).ok_or_else(|| {
                    AppError::ExternalServiceError(format!(
                        "{}번째 목적지의 소요 시간이 없습니다 (status: {})",
                        index,
                        element.status.unwrap_or_default()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DistanceMatrixResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_durations_follow_destination_order() {
        let response = parse(r#"{
            "status": "OK",
            "rows": [{ "elements": [
                { "status": "OK", "duration": { "value": 300, "text": "5 mins" } },
                { "status": "OK", "duration": { "value": 150, "text": "3 mins" } },
                { "status": "OK", "duration": { "value": 450, "text": "8 mins" } }
            ] }]
        }"#);

        assert_eq!(response.into_durations(3).unwrap(), vec![300, 150, 450]);
    }

    #[test]
    fn test_missing_status_is_accepted() {
        let response = parse(r#"{ "rows": [{ "elements": [ { "duration": { "value": 42 } } ] }] }"#);
        assert_eq!(response.into_durations(1).unwrap(), vec![42]);
    }

    #[test]
    fn test_request_denied_is_external_error() {
        let response = parse(r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "rows": [] }"#);

        match response.into_durations(2) {
            Err(AppError::ExternalServiceError(msg)) => {
                assert!(msg.contains("REQUEST_DENIED"));
                assert!(msg.contains("API key"));
            }
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }
    }

    #[test]
    fn test_element_without_duration_is_external_error() {
        let response = parse(r#"{
            "status": "OK",
            "rows": [{ "elements": [
                { "status": "OK", "duration": { "value": 300 } },
                { "status": "NOT_FOUND" }
            ] }]
        }"#);

        match response.into_durations(2) {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("NOT_FOUND")),
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }
    }

    #[test]
    fn test_element_count_mismatch_is_external_error() {
        let response = parse(r#"{ "status": "OK", "rows": [{ "elements": [ { "duration": { "value": 1 } } ] }] }"#);
        assert!(matches!(response.into_durations(2), Err(AppError::ExternalServiceError(_))));
    }

    #[test]
    fn test_missing_rows_is_external_error() {
        let response = parse(r#"{ "status": "OK" }"#);
        assert!(matches!(response.into_durations(1), Err(AppError::ExternalServiceError(_))));
    }
}
