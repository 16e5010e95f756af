//! # Core Container Module
//!
//! 이름 기반 의존성 주입 컨테이너의 핵심 구현입니다.
//!
//! ## 모듈 구성
//!
//! - [`container`] - 생성자 테이블, 싱글톤 캐시, 잠금 상태 머신, 해석 엔진
//! - [`service`] - 타입이 지워진 서비스 값과 목적지(`Slot`), 타입 할당 검사
//! - [`options`] - 싱글톤 여부와 인터페이스 바인딩
//! - [`wiring`] - `#[di("..")]` 태그 기반 구조체 필드 주입
//! - [`factory`] - 함수 생성자의 파라미터 조립 규칙
//! - [`context`] - 생성자에 전달되는 취소 가능한 컨텍스트
//! - [`errors`] - `DiError`
//!
//! ## 흐름
//!
//! ```text
//! register_* ──▶ Registry (Open) ──lock/check──▶ Locked
//!                                                  │
//!           get / provide / provide_struct ◀───────┘
//!                     │
//!                     ▼
//!        singleton cache ─▶ constructor ─▶ wiring (재귀 해석) ─▶ Slot::fill
//! ```

pub mod container;
pub mod context;
pub mod errors;
pub mod factory;
pub mod options;
pub mod service;
pub mod wiring;

pub use container::{Container, SELF_NAME};
pub use context::Context;
pub use errors::{BoxError, DiError, DiResult};
pub use factory::{Assemble, Factory, Param, Params};
pub use options::Options;
pub use service::{AnyArc, Dep, Service, Slot};
pub use wiring::{Dependency, Wire, Wiring};
