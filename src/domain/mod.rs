//! # Domain Layer Module
//!
//! 데모 애플리케이션의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 보관되는 사용자 엔티티
//! └── DTOs      - HTTP 요청/응답 계약
//! ```

pub mod entities;
pub mod dto;
