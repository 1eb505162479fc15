pub mod register_rider_request;

pub use register_rider_request::RegisterRiderRequest;
