//! # 문자열 유틸리티
//!
//! 서비스 이름 검사와 사용자 입력 정리에 쓰이는 문자열 헬퍼입니다.

use crate::errors::AppError;

/// 빈 문자열이거나 공백만으로 구성되었는지 확인
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert!(is_blank("   "));
/// assert!(!is_blank("user repository"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    if is_blank(value) {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(value.trim().to_string())
}

/// 이메일 주소를 저장용 키로 정규화 (trim + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
