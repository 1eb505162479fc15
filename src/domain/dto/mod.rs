//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 타입입니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//!
//! ## 보안 규칙
//!
//! 엔티티의 `password` 필드(bcrypt 해시)는 어떤 응답 타입에도 포함되지 않습니다.
//! 엔티티를 그대로 `HttpResponse::json`에 넘기지 말고 반드시 응답 DTO로 변환하세요.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/        # 고객
//! ├── riders/       # 라이더 (위치 갱신 본문은 entities::Location 재사용)
//! ├── food_items/   # 메뉴 항목
//! ├── restaurants/  # 레스토랑, 배달 가능 시간 검색 쿼리
//! └── orders/       # 주문, 주문 이력 뷰
//! ```

pub mod users;
pub mod riders;
pub mod food_items;
pub mod restaurants;
pub mod orders;
