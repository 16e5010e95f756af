//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 생성자 함수로 컨테이너에 싱글톤 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserStore, new_user_repository};
//!
//! dc.register_func(
//!     "user repository",
//!     new_user_repository,
//!     Options::new().singleton().bind::<dyn UserStore>(|r| r),
//! );
//! ```

pub mod users;
