//! 사용자 관련 비즈니스 로직
//!
//! 각 동작은 필드 주입을 받는 구조체로 표현되며 컨테이너에 구조체 템플릿으로 등록됩니다.

pub mod user_service;

pub use user_service::{CreateUserAction, GetUserAction};
