pub mod add_food_item_request;

pub use add_food_item_request::AddFoodItemRequest;
