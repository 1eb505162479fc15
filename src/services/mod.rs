//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 모든 서비스는 `#[service]` 매크로로 싱글톤 등록되며,
//! `Arc<T>` 필드는 `ServiceLocator`가 자동 주입합니다.
//!
//! ```text
//! UserService, RiderService, FoodItemService   (등록/조회)
//! RestaurantService ──▶ DispatchService, AssemblerService
//! OrderService      ──▶ DispatchService, AssemblerService
//! DispatchService   ──▶ DistanceMatrixClient (거리 계산 API)
//! AssemblerService  ──▶ 각 리포지토리 (참조 확장)
//! ```

pub mod credentials;
pub mod users;
pub mod riders;
pub mod food_items;
pub mod restaurants;
pub mod orders;
pub mod dispatch;
pub mod assembler;
