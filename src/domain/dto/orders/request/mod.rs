pub mod place_order_request;

pub use place_order_request::PlaceOrderRequest;
