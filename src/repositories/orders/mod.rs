//! 주문 데이터 액세스 계층

pub mod order_repo;
