//! # Food Delivery Backend
//!
//! 고객, 라이더, 레스토랑, 메뉴 항목, 주문을 관리하는 음식 배달 백엔드입니다.
//! 외부 거리 계산 API로 주문 레스토랑에서 가장 가까운 라이더를 배정하고,
//! 고객 주소에서 제한 시간 안에 배달 가능한 레스토랑을 찾습니다.
//!
//! ```text
//! handlers ──▶ services ──▶ repositories ──▶ db (MongoDB)
//!                  │
//!                  └──────▶ distance (Distance Matrix API)
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod distance;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
