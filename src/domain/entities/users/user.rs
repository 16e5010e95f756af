//! User Entity Implementation
//!
//! 이메일을 키로 저장되는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    /// 사용자 이메일 (unique, 소문자로 정규화됨)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 해시된 비밀번호
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일은 호출자가 정규화해서 넘겨야 합니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_unique_id() {
        let a = User::new("a@example.com".to_string(), "a".to_string(), "hash".to_string());
        let b = User::new("b@example.com".to_string(), "b".to_string(), "hash".to_string());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("a@example.com".to_string(), "a".to_string(), "secret".to_string());

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@example.com");
    }
}
