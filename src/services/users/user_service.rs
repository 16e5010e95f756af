//! # 사용자 서비스 동작
//!
//! | 서비스 이름 | 타입 | 의존성 |
//! |-------------|------|--------|
//! | `"create user"` | [`CreateUserAction`] | `"user repository"`, `"crypto"` |
//! | `"get user"` | [`GetUserAction`] | `"user repository"` (`dyn UserStore`) |

use log::info;
use validator::Validate;

use crate::core::service::Dep;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;
use crate::repositories::users::{UserRepository, UserStore};
use crate::services::crypto::Crypto;
use crate::utils::string_utils::{normalize_email, validate_required_string};
use crate::wired;

wired! {
    /// 사용자 생성
    #[derive(Default, Clone)]
    pub struct CreateUserAction {
        #[di("user repository")]
        pub repo: Dep<UserRepository>,
        #[di("crypto")]
        pub crypto: Dep<Crypto>,
    }
}

impl CreateUserAction {
    /// 입력을 검증하고 비밀번호를 해싱한 뒤 사용자를 저장합니다.
    ///
    /// 이메일은 소문자로 정규화되므로 대소문자만 다른 이메일은 중복으로 처리됩니다.
    pub fn execute(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        let email = normalize_email(&request.email);
        let name = validate_required_string(&request.name, "name")?;
        let password_hash = self.crypto.hash_password(&request.password)?;

        let user = self.repo.insert(User::new(email, name, password_hash))?;
        info!("user {} created", user.id);
        Ok(user)
    }
}

wired! {
    /// 이메일로 사용자 조회
    #[derive(Default, Clone)]
    pub struct GetUserAction {
        #[di("user repository")]
        pub store: Dep<dyn UserStore>,
    }
}

impl GetUserAction {
    pub fn execute(&self, email: &str) -> AppResult<User> {
        self.store.get(&normalize_email(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Environment};
    use crate::errors::errors::AppError;
    use crate::services::register_all_services;
    use crate::{Container, Context};

    fn container() -> Container {
        let dc = Container::new();
        register_all_services(
            &dc,
            AppConfig {
                environment: Environment::Test,
                host: "127.0.0.1".to_string(),
                port: 0,
                password_hash_cost: 4,
            },
        );
        dc.check(&Context::background()).unwrap();
        dc
    }

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            name: " test ".to_string(),
            password: "SecurePass123".to_string(),
        }
    }

    #[test]
    fn test_create_then_get() {
        let dc = container();
        let ctx = Context::background();

        let create = dc.must_resolve::<CreateUserAction>(&ctx, "create user");
        let created = create.execute(request("Me@Example.com")).unwrap();
        assert_eq!(created.email, "me@example.com");
        assert_eq!(created.name, "test");
        assert_ne!(created.password_hash, "SecurePass123");

        let get = dc.must_resolve::<GetUserAction>(&ctx, "get user");
        assert_eq!(get.execute("ME@example.com").unwrap().id, created.id);
    }

    #[test]
    fn test_actions_share_singleton_repository() {
        let dc = container();
        let ctx = Context::background();

        let first = dc.must_resolve::<CreateUserAction>(&ctx, "create user");
        let second = dc.must_resolve::<CreateUserAction>(&ctx, "create user");
        first.execute(request("me@example.com")).unwrap();

        let err = second.execute(request("ME@example.com")).unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
        assert_eq!(second.repo.count().unwrap(), 1);
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let dc = container();
        let mut action = CreateUserAction::default();
        dc.must_provide_struct(&Context::background(), &mut action);

        let err = action.execute(request("not-an-email")).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(action.repo.count().unwrap(), 0);
    }
}
