//! Orders Entity Module
//!
//! 주문 엔티티와 주문 상태 값을 정의합니다.

pub mod order;
