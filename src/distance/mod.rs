//! # Distance Oracle Module
//!
//! 출발지 하나에서 여러 목적지까지의 이동 소요 시간(초)을 알려주는 외부 API 연동입니다.
//! 라이더 배정과 배달 가능 레스토랑 검색이 이 모듈에만 의존합니다.
//!
//! ```text
//! DispatchService ── Arc<DistanceMatrixClient> (운영: reqwest)
//!        │
//!        ▼
//! dispatch::selection::*<O: DistanceOracle>
//!        ├── DistanceMatrixClient
//!        └── 테스트용 고정 응답 oracle
//! ```
//!
//! 서비스 주입은 구체 타입으로만 가능하므로 `DispatchService`는 클라이언트를 직접 보유합니다.
//! 교체 지점은 `DistanceOracle`을 제네릭으로 받는 선택 함수입니다.
//!
//! ## 계약
//!
//! - 반환 벡터 길이는 목적지 수와 같고 순서도 같습니다.
//! - 목적지가 비어 있으면 외부 호출 없이 빈 벡터를 반환합니다.
//! - 재시도, 타임아웃, 배치 분할은 하지 않습니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;

pub mod matrix_client;

pub use matrix_client::DistanceMatrixClient;

/// 이동 소요 시간 조회
#[async_trait]
pub trait DistanceOracle: Send + Sync {
    /// `origin`에서 각 `destinations[i]`까지의 소요 시간(초)
    async fn travel_durations(&self, origin: &str, destinations: &[String]) -> AppResult<Vec<u64>>;
}

/// 목적지 목록을 API 형식(`|` 구분)으로 합칩니다.
pub fn join_destinations(destinations: &[String]) -> String {
    destinations.join("|")
}
