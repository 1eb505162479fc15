//! # Domain Entities Module
//!
//! MongoDB 컬렉션에 저장되는 다섯 가지 도메인 엔티티를 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 참조 |
//! |--------|--------|------|
//! | [`User`](users::user::User) | `user` | - |
//! | [`Rider`](riders::rider::Rider) | `rider` | - |
//! | [`FoodItem`](food_items::food_item::FoodItem) | `food_item` | - |
//! | [`Restaurant`](restaurants::restaurant::Restaurant) | `restaurant` | `menu` → FoodItem |
//! | [`Order`](orders::order::Order) | `order` | `restaurant`, `user`, `rider`, `items` |
//!
//! 엔티티는 최초 저장 시 `_id`가 할당되고, 이후에는 문서 전체 교체로만 변경됩니다.
//! 삭제 연산은 제공하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};

pub mod users;
pub mod riders;
pub mod restaurants;
pub mod food_items;
pub mod orders;

/// MongoDB 문서로 저장되는 엔티티 공통 인터페이스
///
/// 리포지토리의 공통 `find_one`/`find`/`save` 구현이 이 trait만으로 동작합니다.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// ID 문자열로 변환
    fn id_string(&self) -> Option<String> {
        self.id().map(|id| id.to_hex())
    }
}

/// `Entity` 구현을 생성합니다. 모든 엔티티는 `id: Option<ObjectId>` 필드를 가집니다.
macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::domain::entities::Entity for $ty {
                fn id(&self) -> Option<ObjectId> {
                    self.id
                }

                fn set_id(&mut self, id: ObjectId) {
                    self.id = Some(id);
                }
            }
        )*
    };
}

impl_entity!(
    users::user::User,
    riders::rider::Rider,
    restaurants::restaurant::Restaurant,
    food_items::food_item::FoodItem,
    orders::order::Order,
);

pub use users::user::User;
pub use riders::rider::{Location, Rider};
pub use restaurants::restaurant::Restaurant;
pub use food_items::food_item::FoodItem;
pub use orders::order::Order;
