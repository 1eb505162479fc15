//! # Domain Models
//!
//! 저장소에 저장되지 않는 외부 연동용 모델입니다.
//!
//! - [`distance_matrix`] - 거리 계산 API 응답 본문

pub mod distance_matrix;

pub use distance_matrix::DistanceMatrixResponse;
