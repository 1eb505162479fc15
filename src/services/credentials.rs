//! 비밀번호 해싱
//!
//! 고객, 라이더, 레스토랑 등록이 모두 같은 규칙으로 비밀번호를 저장합니다.
//! cost는 [`PasswordConfig::bcrypt_cost`]를 따릅니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

pub fn hash_password(plain: &str) -> AppResult<String> {
    hash_password_with_cost(plain, PasswordConfig::bcrypt_cost())
}

pub fn hash_password_with_cost(plain: &str, cost: u32) -> AppResult<String> {
    let hash_start = std::time::Instant::now();
    let hashed = bcrypt::hash(plain, cost).context("비밀번호 해싱 실패")?;
    log::debug!("Password hashing took: {:?}", hash_start.elapsed());

    Ok(hashed)
}
