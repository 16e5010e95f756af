//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 팩토리들을 정의하는 모듈입니다.
//!
//! 각 팩토리는 의존성 주입된 서비스 구조체를 인자로 받아 actix-web 핸들러를 반환하며,
//! 라우트 설정에서 `Container::must_provide_handler`로 조립됩니다.
//!
//! ```text
//! Container ──provide_handler──▶ users::create_user(CreateUserAction) ──▶ impl Handler
//! ```

pub mod users;
