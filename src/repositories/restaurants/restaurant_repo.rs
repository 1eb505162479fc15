//! # 레스토랑 리포지토리 구현

use std::sync::Arc;
use mongodb::Collection;
use singleton_macro::repository;
use crate::{
    db::Database,
    domain::entities::Restaurant,
    repositories::DocumentRepository,
};

#[repository(name = "restaurant", collection = "restaurant")]
pub struct RestaurantRepository {
    db: Arc<Database>,
}

impl DocumentRepository for RestaurantRepository {
    type Entity = Restaurant;

    fn documents(&self) -> Collection<Restaurant> {
        self.collection::<Restaurant>()
    }
}
