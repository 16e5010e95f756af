//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 타입으로 변환하고
//! `validator` 크레이트로 형식 규칙을 검증합니다.

pub mod create_user;

pub use create_user::CreateUserRequest;
