pub mod food_item_response;

pub use food_item_response::FoodItemResponse;
