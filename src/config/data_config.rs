//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 결정합니다.
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// 사용자, 라이더, 레스토랑 등록 시 bcrypt cost로 사용됩니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 설정되어 있으면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
///
/// ```bash
/// export MONGODB_CONNECTION_URI="mongodb://localhost:27017"
/// export DB_NAME="food_delivery"
/// ```
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn connection_uri() -> String {
        env::var("MONGODB_CONNECTION_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DB_NAME").unwrap_or_else(|_| "food_delivery_dev".to_string())
    }

    /// MongoDB 클라이언트에 표시되는 애플리케이션 이름
    pub fn app_name() -> &'static str {
        "food_delivery"
    }
}
