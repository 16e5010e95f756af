//! 애플리케이션 에러 모듈
//!
//! HTTP 계층까지 전달되는 [`AppError`]와 관련 헬퍼를 제공합니다.
//! 컨테이너 자체의 에러는 [`crate::core::errors::DiError`]를 참고하세요.

pub mod errors;

pub use errors::*;
