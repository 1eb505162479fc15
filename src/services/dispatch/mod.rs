//! # Dispatch
//!
//! 거리 계산 API 결과로 후보를 고르는 두 가지 기능입니다.
//!
//! - 라이더 배정: 레스토랑 주소에서 가장 빨리 도착하는 라이더
//! - 배달 가능 레스토랑 검색: 고객 주소에서 제한 시간 안에 도착하는 레스토랑
//!
//! 선택 규칙은 [`selection`]의 순수 함수에 있고, [`DispatchService`](dispatch_service::DispatchService)는
//! 후보 조회와 API 호출만 담당합니다.

pub mod selection;
pub mod dispatch_service;
