//! # 주문 리포지토리 구현

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use singleton_macro::repository;
use crate::{
    core::errors::AppResult,
    db::Database,
    domain::entities::Order,
    repositories::DocumentRepository,
};

#[repository(name = "order", collection = "order")]
pub struct OrderRepository {
    db: Arc<Database>,
}

impl DocumentRepository for OrderRepository {
    type Entity = Order;

    fn documents(&self) -> Collection<Order> {
        self.collection::<Order>()
    }
}

impl OrderRepository {
    /// 고객의 주문 이력
    pub async fn find_by_user(&self, user_id: ObjectId) -> AppResult<Vec<Order>> {
        self.find(doc! { "user": user_id }).await
    }

    /// 라이더에게 배정된 주문 이력
    pub async fn find_by_rider(&self, rider_id: ObjectId) -> AppResult<Vec<Order>> {
        self.find(doc! { "rider": rider_id }).await
    }
}
