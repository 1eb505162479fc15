//! # Domain Layer Module
//!
//! 음식 배달 백엔드의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서로 저장되는 객체 (User, Rider, Restaurant, FoodItem, Order)
//! ├── DTOs      - API 요청/응답 계약 (비밀번호 해시는 응답에 포함되지 않음)
//! └── Models    - 외부 API 연동 모델 (거리 계산 API 응답)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Distance Matrix Client)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//!
//! 컬렉션 단위의 영속 객체입니다. 서로를 `ObjectId`로만 참조하고,
//! 참조 무결성은 저장 시점에 검사하지 않습니다. 참조 확장은
//! [`AssemblerService`](crate::services::assembler::AssemblerService)가 읽기 시점에 수행합니다.
//!
//! ### [`dto`]
//!
//! 도메인별 `request`/`response` 모듈로 나뉩니다.
//!
//! ```text
//! dto/
//! ├── users/        RegisterUserRequest, UserResponse
//! ├── riders/       RegisterRiderRequest, RiderResponse
//! ├── food_items/   AddFoodItemRequest, FoodItemResponse
//! ├── restaurants/  RegisterRestaurantRequest, RestaurantsWithinQuery, RestaurantResponse
//! └── orders/       PlaceOrderRequest, OrderResponse, OrdersByUserResponse, OrdersByRiderResponse
//! ```
//!
//! ### [`models`]
//!
//! 외부 시스템 응답을 역직렬화하는 모델입니다. 저장되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::RegisterUserRequest;
//! use crate::domain::dto::users::response::UserResponse;
//! use crate::domain::entities::User;
//!
//! request.validate()?;
//! let user = User::new(request.username, request.address, password_hash);
//! let saved = user_repo.save(user).await?;
//! let response = UserResponse::from(saved);
//! ```

pub mod entities;
pub mod dto;
pub mod models;
