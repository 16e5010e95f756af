//! # Domain Entities Module
//!
//! 저장소에 보관되는 핵심 엔티티들을 정의합니다.

pub mod users;

pub use users::User;
