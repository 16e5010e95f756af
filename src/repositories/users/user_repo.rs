//! # 사용자 리포지토리 구현
//!
//! 이메일을 키로 사용자를 보관하는 메모리 기반 리포지토리입니다.
//!
//! ## 특징
//!
//! - **싱글톤 등록**: `"user repository"` 이름으로 한 번만 생성
//! - **이메일 유일성**: 같은 이메일의 두 번째 삽입은 `ConflictError`
//! - **읽기 인터페이스**: 조회만 필요한 서비스는 [`UserStore`]로 주입받음

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::core::context::Context;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 조회 인터페이스
pub trait UserStore: Send + Sync {
    fn get(&self, email: &str) -> AppResult<User>;
}

/// 사용자 데이터 액세스 리포지토리
#[derive(Debug, Default)]
pub struct UserRepository {
    data: RwLock<HashMap<String, User>>,
}

/// 컨테이너에 등록되는 생성자
pub fn new_user_repository(_ctx: Context) -> AppResult<UserRepository> {
    debug!("creating in-memory user repository");
    Ok(UserRepository::default())
}

impl UserRepository {
    /// 사용자를 저장합니다. 이미 있는 이메일이면 실패합니다.
    pub fn insert(&self, user: User) -> AppResult<User> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if data.contains_key(&user.email) {
            return Err(AppError::ConflictError(format!(
                "user with email {} already exists",
                user.email
            )));
        }

        data.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    pub fn count(&self) -> AppResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        Ok(data.len())
    }
}

impl UserStore for UserRepository {
    fn get(&self, email: &str) -> AppResult<User> {
        let data = self
            .data
            .read()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        data.get(email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user with email {} not found", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(email.to_string(), "test".to_string(), "hash".to_string())
    }

    #[test]
    fn test_insert_and_get() {
        let repo = new_user_repository(Context::background()).unwrap();

        repo.insert(user("me@example.com")).unwrap();
        assert_eq!(repo.get("me@example.com").unwrap().name, "test");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_email_conflicts() {
        let repo = UserRepository::default();
        repo.insert(user("me@example.com")).unwrap();

        let err = repo.insert(user("me@example.com")).unwrap_err();
        assert!(matches!(err, AppError::ConflictError(msg) if msg.contains("already exists")));
    }

    #[test]
    fn test_missing_user_not_found() {
        let repo = UserRepository::default();

        assert!(matches!(repo.get("nobody@example.com"), Err(AppError::NotFound(_))));
    }
}
