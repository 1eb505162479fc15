pub mod food_item_repo;
