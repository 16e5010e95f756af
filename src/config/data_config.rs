//! 서버 및 애플리케이션 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 패스워드 해싱 설정을 환경 변수에서 읽어옵니다.
//! 읽어 들인 값은 [`AppConfig`]로 모여 컨테이너에 `"config"` 서비스로 등록됩니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_name(&name)
    }

    /// 환경 이름(대소문자 무관)에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `PASSWORD_HASH_COST`가 설정되어 있으면 4-31 범위로 잘라 사용하고,
    /// 숫자가 아니면 환경별 기본값을 사용합니다.
    pub fn hash_cost() -> u32 {
        Self::hash_cost_from(
            env::var("PASSWORD_HASH_COST").ok().as_deref(),
            &Environment::current(),
        )
    }

    pub fn hash_cost_from(raw: Option<&str>, env: &Environment) -> u32 {
        match raw.and_then(|value| value.trim().parse::<u32>().ok()) {
            Some(cost) => cost.clamp(Self::MIN_COST, Self::MAX_COST),
            None => Self::hash_cost_for_env(env),
        }
    }

    /// 특정 환경에 대한 기본 bcrypt cost
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging/Production: 10
    pub fn hash_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => Self::MIN_COST,
            Environment::Staging | Environment::Production => 10,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 패스워드 해싱 정책
///
/// 설정 서비스가 구현하며, 해싱을 수행하는 서비스는 이 인터페이스로만 설정에 의존합니다.
pub trait PasswordPolicy: Send + Sync {
    fn password_hash_cost(&self) -> u32;
}

/// 컨테이너에 등록되는 애플리케이션 설정
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub password_hash_cost: u32,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            host: ServerConfig::host(),
            port: ServerConfig::port(),
            password_hash_cost: PasswordConfig::hash_cost(),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PasswordPolicy for AppConfig {
    fn password_hash_cost(&self) -> u32 {
        self.password_hash_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_hash_cost_for_each_environment() {
        assert_eq!(PasswordConfig::hash_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::hash_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::hash_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::hash_cost_for_env(&Environment::Production), 10);
    }

    #[test]
    fn test_hash_cost_is_clamped() {
        let env = Environment::Production;

        assert_eq!(PasswordConfig::hash_cost_from(Some("12"), &env), 12);
        assert_eq!(PasswordConfig::hash_cost_from(Some("1"), &env), 4);
        assert_eq!(PasswordConfig::hash_cost_from(Some("99"), &env), 31);
        assert_eq!(PasswordConfig::hash_cost_from(Some("abc"), &env), 10);
        assert_eq!(PasswordConfig::hash_cost_from(None, &Environment::Test), 4);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_app_config_bind_address_and_policy() {
        let config = AppConfig {
            environment: Environment::Test,
            host: "127.0.0.1".to_string(),
            port: 3000,
            password_hash_cost: 5,
        };

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        let policy: &dyn PasswordPolicy = &config;
        assert_eq!(policy.password_hash_cost(), 5);
    }
}
