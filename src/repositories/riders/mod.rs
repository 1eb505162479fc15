//! 라이더 데이터 액세스 계층

pub mod rider_repo;
