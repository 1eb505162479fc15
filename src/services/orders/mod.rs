pub mod acceptance;
pub mod order_service;
