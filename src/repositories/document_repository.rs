//! 엔티티 공통 조회/저장 연산

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, Collection};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;

/// 단일 컬렉션에 대한 문서 저장소
///
/// 구현체는 [`documents`](DocumentRepository::documents)만 제공하면 됩니다.
/// 삭제 연산은 없으며, 변경은 항상 `_id` 기준 문서 전체 교체(upsert)입니다.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    type Entity: Entity;

    fn documents(&self) -> Collection<Self::Entity>;

    /// 조건에 맞는 첫 문서
    async fn find_one(&self, filter: Document) -> AppResult<Option<Self::Entity>> {
        self.documents()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건에 맞는 모든 문서 (저장소 순서)
    async fn find(&self, filter: Document) -> AppResult<Vec<Self::Entity>> {
        let cursor = self.documents()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Self::Entity>> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>> {
        self.find(doc! {}).await
    }

    /// 최초 저장 시 `_id`를 할당하고, 이후에는 같은 `_id` 문서를 통째로 교체합니다.
    async fn save(&self, mut entity: Self::Entity) -> AppResult<Self::Entity> {
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = ObjectId::new();
                entity.set_id(id);
                id
            }
        };

        self.documents()
            .replace_one(doc! { "_id": id }, &entity)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(entity)
    }
}
