//! Google Distance Matrix 호환 HTTP 클라이언트

use async_trait::async_trait;
use crate::config::DistanceMatrixConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::DistanceMatrixResponse;
use super::{join_destinations, DistanceOracle};

/// 거리 계산 API 클라이언트
///
/// 내부 `reqwest::Client` 커넥션 풀을 재사용하도록 프로세스 시작 시 한 번 만들어
/// `ServiceLocator`에 등록합니다.
///
/// ```rust,ignore
/// let client = Arc::new(DistanceMatrixClient::new()?);
/// ServiceLocator::set(client);
/// ```
pub struct DistanceMatrixClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DistanceMatrixClient {
    /// 환경 변수(`DISTANCE_MATRIX_URL`, `API_TOKEN`)로 생성
    pub fn new() -> AppResult<Self> {
        if !DistanceMatrixConfig::is_configured() {
            log::warn!("API_TOKEN이 설정되지 않았습니다. 거리 계산 API 호출이 실패합니다.");
        }

        Self::with_endpoint(DistanceMatrixConfig::base_url(), DistanceMatrixConfig::api_key())
    }

    pub fn with_endpoint(base_url: impl Into<String>, api_key: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DistanceOracle for DistanceMatrixClient {
    async fn travel_durations(&self, origin: &str, destinations: &[String]) -> AppResult<Vec<u64>> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let joined = join_destinations(destinations);
        log::debug!("거리 계산 API 호출: origin={}, destinations={}", origin, destinations.len());

        let response = self.http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("origins", origin),
                ("destinations", joined.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("거리 계산 API 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "거리 계산 API 응답 오류 ({}): {}", status, error_text
            )));
        }

        let body = response
            .json::<DistanceMatrixResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("거리 계산 API 응답 파싱 실패: {}", e)))?;

        body.into_durations(destinations.len())
    }
}
