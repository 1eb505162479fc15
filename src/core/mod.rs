//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::{repository, service};
//!
//! #[repository(name = "rider", collection = "rider")]
//! pub struct RiderRepository {
//!     db: Arc<Database>,
//! }
//!
//! #[service(name = "dispatch")]
//! pub struct DispatchService {
//!     rider_repo: Arc<RiderRepository>,        // 자동 주입
//!     oracle: Arc<DistanceMatrixClient>,       // main 에서 수동 등록
//! }
//!
//! let dispatch = DispatchService::instance();
//! ```
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! // 1. 인프라 컴포넌트 등록
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::set(Arc::new(DistanceMatrixClient::new()?));
//!
//! // 2. 모든 리포지토리/서비스 초기화
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: OrderService
//! ```
//! **해결**: 서비스 계층 구조를 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: DistanceMatrixClient. Make sure it's registered...
//! ```
//! **해결**: `main`에서 `ServiceLocator::set()` 호출 순서 확인

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
