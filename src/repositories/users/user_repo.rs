//! # 고객 리포지토리 구현

use std::sync::Arc;
use mongodb::Collection;
use singleton_macro::repository;
use crate::{
    db::Database,
    domain::entities::User,
    repositories::DocumentRepository,
};

#[repository(name = "user", collection = "user")]
pub struct UserRepository {
    db: Arc<Database>,
}

impl DocumentRepository for UserRepository {
    type Entity = User;

    fn documents(&self) -> Collection<User> {
        self.collection::<User>()
    }
}
