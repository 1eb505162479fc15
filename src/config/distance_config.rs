//! # Distance Matrix Configuration Module
//!
//! 라이더 배정과 배달 가능 레스토랑 검색에 사용하는 거리 계산 API 설정입니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export API_TOKEN="your-distance-matrix-api-key"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! # 기본값: Google Distance Matrix JSON 엔드포인트
//! export DISTANCE_MATRIX_URL="https://maps.googleapis.com/maps/api/distancematrix/json"
//! ```

use std::env;

/// Google Distance Matrix JSON 엔드포인트
pub const DEFAULT_DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// 거리 계산 API 설정
pub struct DistanceMatrixConfig;

impl DistanceMatrixConfig {
    /// API 키 (`key` 쿼리 파라미터)
    ///
    /// 설정되지 않으면 빈 문자열을 반환하며, 이 경우 API 호출이
    /// 외부 서비스 에러로 실패합니다.
    pub fn api_key() -> String {
        env::var("API_TOKEN").unwrap_or_default()
    }

    pub fn base_url() -> String {
        env::var("DISTANCE_MATRIX_URL").unwrap_or_else(|_| DEFAULT_DISTANCE_MATRIX_URL.to_string())
    }

    pub fn is_configured() -> bool {
        !Self::api_key().trim().is_empty()
    }
}
