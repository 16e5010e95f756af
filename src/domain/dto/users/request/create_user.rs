//! # 사용자 생성 요청 DTO
//!
//! ## 검증 규칙
//!
//! - `email`: 이메일 형식
//! - `name`: 1-50자
//! - `password`: 최소 8자, 대문자/소문자/숫자 포함

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// ```json
/// {
///   "email": "me@example.com",
///   "name": "test",
///   "password": "SecurePass123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 비밀번호에 대문자, 소문자, 숫자가 모두 포함되어 있는지 검증
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
