//! Users Entity Module
//!
//! 주문을 넣는 고객 엔티티를 정의합니다. 배송지 주소는 배달 가능 레스토랑 검색의
//! 출발지로 사용됩니다.

pub mod user;
