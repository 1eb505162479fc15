//! # Repository Layer
//!
//! 엔티티별 MongoDB 접근 계층입니다. 모든 리포지토리는 `#[repository]` 매크로로
//! 싱글톤 등록되고, 공통 조회/저장 연산은 [`DocumentRepository`]의 기본 구현을 사용합니다.
//!
//! | 리포지토리 | 등록 이름 | 컬렉션 |
//! |------------|-----------|--------|
//! | [`UserRepository`](users::user_repo::UserRepository) | `user_repository` | `user` |
//! | [`RiderRepository`](riders::rider_repo::RiderRepository) | `rider_repository` | `rider` |
//! | [`RestaurantRepository`](restaurants::restaurant_repo::RestaurantRepository) | `restaurant_repository` | `restaurant` |
//! | [`FoodItemRepository`](food_items::food_item_repo::FoodItemRepository) | `fooditem_repository` | `food_item` |
//! | [`OrderRepository`](orders::order_repo::OrderRepository) | `order_repository` | `order` |

pub mod document_repository;
pub mod users;
pub mod riders;
pub mod restaurants;
pub mod food_items;
pub mod orders;

pub use document_repository::DocumentRepository;
