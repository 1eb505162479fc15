//! # 메뉴 항목 리포지토리 구현

use std::sync::Arc;
use mongodb::Collection;
use singleton_macro::repository;
use crate::{
    db::Database,
    domain::entities::FoodItem,
    repositories::DocumentRepository,
};

// 등록 이름은 ServiceLocator 타입명 규칙(`FoodItemRepository` → `fooditem`)을 따릅니다.
#[repository(name = "fooditem", collection = "food_item")]
pub struct FoodItemRepository {
    db: Arc<Database>,
}

impl DocumentRepository for FoodItemRepository {
    type Entity = FoodItem;

    fn documents(&self) -> Collection<FoodItem> {
        self.collection::<FoodItem>()
    }
}
