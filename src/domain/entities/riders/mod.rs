//! Riders Entity Module
//!
//! 배달 라이더와 현재 위치 엔티티를 정의합니다.

pub mod rider;
