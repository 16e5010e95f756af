//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 패스워드 해싱 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export PASSWORD_HASH_COST="10"   # 4-31 범위로 보정됨
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use di_container::config::{AppConfig, PasswordPolicy};
//! use di_container::{Container, Options};
//!
//! let dc = Container::new();
//! dc.register_instance_with(
//!     "config",
//!     AppConfig::from_env(),
//!     Options::<AppConfig>::new().bind::<dyn PasswordPolicy>(|c| c),
//! );
//! ```

pub mod data_config;

pub use data_config::*;
