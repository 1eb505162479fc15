pub mod food_item_service;
