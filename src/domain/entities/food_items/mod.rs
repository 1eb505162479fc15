//! Food Items Entity Module
//!
//! 메뉴 항목과 재고 수량을 정의합니다.

pub mod food_item;
