//! 이름 기반 의존성 주입 컨테이너
//!
//! 서비스 생성자를 이름으로 등록하고, 잠근 뒤 타입 검사된 목적지로 해석합니다.
//! 구조체 필드는 `#[di("서비스 이름")]` 태그로 자동 주입됩니다.
//!
//! # Features
//!
//! - **세 가지 등록 방식**: 인스턴스, 구조체 템플릿, 생성자 함수
//! - **싱글톤 옵션**: 첫 생성 결과를 이름 아래 영구 캐시
//! - **잠금 상태 머신**: 등록 에러는 한 번만 기록되어 `lock`/`check`에서 반환
//! - **타입 할당 검사**: 구체 타입과 `dyn Trait` 인터페이스 모두 지원
//! - **HTTP 핸들러 팩토리**: actix-web 핸들러를 의존성 주입으로 조립
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← must_provide_handler로 조립된 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← wired! 구조체 (CreateUserAction, Crypto)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 싱글톤 생성자 함수
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Container    │ ← core
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use di_container::{Container, Context, Dep, Options, wired};
//!
//! wired! {
//!     #[derive(Default)]
//!     struct A {
//!         #[di("foo")]
//!         foo: Dep<String>,
//!     }
//! }
//!
//! let dc = Container::new();
//! dc.register_instance("foo", "bar".to_string())
//!     .register_struct("a", Options::<A>::new());
//! dc.check(&Context::background())?;
//!
//! let a = dc.must_resolve::<A>(&Context::background(), "a");
//! assert_eq!(a.foo.as_str(), "bar");
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

pub use crate::core::{
    Assemble, BoxError, Container, Context, Dep, Dependency, DiError, DiResult, Factory, Options,
    Param, Params, SELF_NAME, Service, Slot, Wire, Wiring,
};
