//! 레스토랑 데이터 액세스 계층

pub mod restaurant_repo;
