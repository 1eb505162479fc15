//! # 라이더 리포지토리 구현

use std::sync::Arc;
use mongodb::Collection;
use singleton_macro::repository;
use crate::{
    db::Database,
    domain::entities::Rider,
    repositories::DocumentRepository,
};

/// 라이더 컬렉션
///
/// 라이더 배정은 `find_all()` 결과 전체를 후보로 사용합니다.
/// 비활성(`isActive: false`) 라이더도 걸러내지 않습니다.
#[repository(name = "rider", collection = "rider")]
pub struct RiderRepository {
    db: Arc<Database>,
}

impl DocumentRepository for RiderRepository {
    type Entity = Rider;

    fn documents(&self) -> Collection<Rider> {
        self.collection::<Rider>()
    }
}
