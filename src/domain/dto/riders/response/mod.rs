pub mod rider_response;

pub use rider_response::RiderResponse;
