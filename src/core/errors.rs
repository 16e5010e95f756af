//! # Container Error Handling
//!
//! 의존성 주입 컨테이너에서 발생하는 모든 에러를 정의합니다.
//! 등록 단계의 에러는 컨테이너에 한 번만 기록(sticky)되었다가 `lock`/`check` 시점에
//! 반환되고, 해석(resolution) 단계의 에러는 `get`/`provide` 호출자에게 즉시 반환됩니다.
//!
//! ## 에러 분류
//!
//! | DiError | 단계 | 발생 시나리오 |
//! |---------|------|---------------|
//! | `RegistrationConflict` | 등록 | 이미 사용 중인 서비스 이름 |
//! | `InvalidShape` | 등록 | 비어 있거나 공백뿐인 서비스 이름 |
//! | `NotLocked` | 해석 | `lock`/`check` 이전의 해석 시도 (서비스 이름 또는 대상 타입 이름) |
//! | `NotFound` | 해석 | 생성자도 싱글톤도 없는 이름 |
//! | `TypeMismatch` | 해석 | 목적지 타입/인터페이스와 호환되지 않는 값 |
//! | `ConstructorFailure` | 해석 | 사용자 생성자 실패 (서비스 이름 포함) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use di_container::{Container, Context, DiError};
//!
//! let dc = Container::new();
//! match dc.get(&Context::background(), "foo") {
//!     Err(DiError::NotLocked(name)) => log::warn!("{} 조회 전에 lock이 필요합니다", name),
//!     Err(e) => return Err(e),
//!     Ok(service) => { /* ... */ }
//! }
//! ```

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// 사용자 생성자가 반환하는 에러의 박싱 타입
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// 컨테이너 전역 에러 타입
///
/// sticky 에러를 `lock`이 호출될 때마다 그대로 돌려주기 위해 `Clone`을 구현합니다.
/// 원인 에러는 `Arc`로 공유되므로 복제 비용이 낮습니다.
#[derive(Error, Debug, Clone)]
pub enum DiError {
    /// 같은 이름이 생성자 테이블이나 싱글톤 캐시에 이미 존재함
    #[error("service {0} already registered")]
    RegistrationConflict(String),

    /// 등록하려는 값이나 이름이 요구되는 형태가 아님
    #[error("invalid service {name:?}: {reason}")]
    InvalidShape { name: String, reason: String },

    /// `lock`/`check` 이전에 해석을 시도함
    ///
    /// 값은 해석하려던 대상입니다. `get`/`provide`에서는 서비스 이름,
    /// `provide_struct`/`provide_handler`에서는 이름이 없으므로 대상 타입 이름입니다.
    #[error("container should be locked before resolving {0}")]
    NotLocked(String),

    /// 해당 이름으로 등록된 서비스가 없음
    #[error("service {0} not found")]
    NotFound(String),

    /// 해석된 값이 목적지 타입에 할당될 수 없음
    ///
    /// 구체 타입 목적지와 인터페이스(`dyn Trait`) 목적지 모두 이 변형을 사용합니다.
    #[error("service {name} ({actual}) not assignable to {expected}")]
    TypeMismatch {
        name: String,
        actual: &'static str,
        expected: &'static str,
    },

    /// 사용자 생성자가 실패했거나 `check` 중 서비스 생성이 실패함
    #[error("{name}: {source}")]
    ConstructorFailure {
        name: String,
        #[source]
        source: Arc<dyn StdError + Send + Sync>,
    },
}

impl DiError {
    /// 서비스 이름을 붙여 생성자 실패로 감쌉니다.
    pub fn constructor(name: &str, source: impl Into<BoxError>) -> Self {
        DiError::ConstructorFailure {
            name: name.to_string(),
            source: Arc::from(source.into()),
        }
    }

    /// 해당 서비스에 이미 귀속된 생성자 실패인지 확인합니다.
    pub fn is_attributed_to(&self, service: &str) -> bool {
        matches!(self, DiError::ConstructorFailure { name, .. } if name == service)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type DiResult<T> = Result<T, DiError>;
