//! 고객 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::{DocumentRepository, users::user_repo::UserRepository};
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_id(id).await?;
//! ```

pub mod user_repo;
