//! # Configuration Module
//!
//! 배달 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`distance_config`] - 거리 계산 API 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_CONNECTION_URI="mongodb://localhost:27017"
//! export DB_NAME="food_delivery"
//!
//! # 거리 계산 API
//! export API_TOKEN="your-api-key"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, DistanceMatrixConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let api_key = DistanceMatrixConfig::api_key();
//! ```

pub mod data_config;
pub mod distance_config;

pub use data_config::*;
pub use distance_config::*;
