pub mod restaurant_response;

pub use restaurant_response::RestaurantResponse;
