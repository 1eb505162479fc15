pub mod order_response;

pub use order_response::{OrderResponse, OrdersByRiderResponse, OrdersByUserResponse, PlacedOrderResponse};
