pub mod register_restaurant_request;
pub mod restaurants_within_query;

pub use register_restaurant_request::RegisterRestaurantRequest;
pub use restaurants_within_query::RestaurantsWithinQuery;
