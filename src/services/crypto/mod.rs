//! 암호화 관련 서비스
//!
//! 패스워드 해싱 정책은 `"config"` 서비스에서 [`PasswordPolicy`](crate::config::PasswordPolicy)
//! 인터페이스로 주입받습니다.

pub mod crypto_service;

pub use crypto_service::Crypto;
