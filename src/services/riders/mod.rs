pub mod rider_service;
