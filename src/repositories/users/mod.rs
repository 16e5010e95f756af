//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 메모리 기반 저장소이며,
//! 조회 전용 소비자는 [`UserStore`](user_repo::UserStore) 인터페이스로 의존합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, UserStore, new_user_repository};
