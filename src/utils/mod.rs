//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`display_terminal`] - 컨테이너 검증 진행 상황 출력

pub mod string_utils;
pub mod display_terminal;
