//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 [`register_all_services`]에서 컨테이너에 이름으로 등록됩니다.
//!
//! | 이름 | 등록 방식 | 바인딩된 인터페이스 |
//! |------|-----------|---------------------|
//! | `"config"` | 인스턴스 | `dyn PasswordPolicy` |
//! | `"user repository"` | 함수 (싱글톤) | `dyn UserStore` |
//! | `"crypto"` | 구조체 (싱글톤) | - |
//! | `"create user"` | 구조체 | - |
//! | `"get user"` | 구조체 | - |

pub mod crypto;
pub mod users;

use crate::config::{AppConfig, PasswordPolicy};
use crate::core::{Container, Options};
use crate::repositories::users::{UserRepository, UserStore, new_user_repository};

use self::crypto::Crypto;
use self::users::{CreateUserAction, GetUserAction};

/// 애플리케이션의 모든 서비스를 등록합니다.
///
/// 등록 에러는 컨테이너에 기록되며 이후 `lock`/`check`에서 확인됩니다.
pub fn register_all_services(dc: &Container, config: AppConfig) -> &Container {
    dc.register_instance_with(
        "config",
        config,
        Options::<AppConfig>::new().bind::<dyn PasswordPolicy>(|c| c),
    )
    .register_func(
        "user repository",
        new_user_repository,
        Options::<UserRepository>::new()
            .singleton()
            .bind::<dyn UserStore>(|r| r),
    )
    .register_struct("crypto", Options::<Crypto>::new().singleton())
    .register_struct("create user", Options::<CreateUserAction>::new())
    .register_struct("get user", Options::<GetUserAction>::new())
}
