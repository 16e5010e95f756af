//! bcrypt 기반 패스워드 해싱 서비스

use log::debug;

use crate::config::PasswordPolicy;
use crate::core::service::Dep;
use crate::errors::errors::{AppResult, ErrorContext};
use crate::wired;

wired! {
    /// 패스워드 해싱과 검증을 담당하는 서비스
    ///
    /// bcrypt cost는 주입된 정책에서 매번 읽습니다.
    #[derive(Default, Clone)]
    pub struct Crypto {
        #[di("config")]
        pub config: Dep<dyn PasswordPolicy>,
    }
}

impl Crypto {
    /// 비밀번호로부터 bcrypt 해시를 생성합니다.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let cost = self.config.password_hash_cost();
        let started = std::time::Instant::now();

        let hashed = bcrypt::hash(password, cost).context("hashing password")?;
        debug!("Password hashing took: {:?} (cost {})", started.elapsed(), cost);
        Ok(hashed)
    }

    /// 비밀번호와 해시가 일치하는지 확인합니다.
    pub fn check_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash).context("check password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Environment};
    use std::sync::Arc;

    fn crypto(cost: u32) -> Crypto {
        let config = AppConfig {
            environment: Environment::Test,
            host: "127.0.0.1".to_string(),
            port: 0,
            password_hash_cost: cost,
        };
        let policy: Arc<dyn PasswordPolicy> = Arc::new(config);
        Crypto {
            config: Dep::new(policy),
        }
    }

    #[test]
    fn test_hash_and_check() {
        let crypto = crypto(4);

        let hash = crypto.hash_password("SecurePass123").unwrap();
        assert!(hash.starts_with("$2"));
        assert!(crypto.check_password("SecurePass123", &hash).unwrap());
        assert!(!crypto.check_password("WrongPass123", &hash).unwrap());
    }

    #[test]
    fn test_hash_uses_policy_cost() {
        let hash = crypto(5).hash_password("SecurePass123").unwrap();

        assert!(hash.contains("$05$"));
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(crypto(4).check_password("x", "not a hash").is_err());
    }
}
