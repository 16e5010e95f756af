//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users/{email}` | 이메일로 사용자 조회 | 200 OK |
//!
//! 핸들러는 요청마다 새로 해석되지 않고, 조립 시점에 주입된 서비스를 복제해 사용합니다.

use actix_web::{Handler, HttpResponse, web};

use crate::domain::dto::users::{CreateUserRequest, UserResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::services::users::{CreateUserAction, GetUserAction};

/// 사용자 생성 핸들러
///
/// bcrypt 해싱은 블로킹 작업이므로 `web::block`에서 실행합니다.
pub fn create_user(
    action: CreateUserAction,
) -> impl Handler<(web::Json<CreateUserRequest>,), Output = AppResult<HttpResponse>> {
    move |payload: web::Json<CreateUserRequest>| {
        let action = action.clone();
        async move {
            let user = web::block(move || action.execute(payload.into_inner()))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))??;

            Ok::<_, AppError>(HttpResponse::Created().json(UserResponse::from(user)))
        }
    }
}

/// 이메일로 사용자 조회 핸들러
pub fn get_user(
    action: GetUserAction,
) -> impl Handler<(web::Path<String>,), Output = AppResult<HttpResponse>> {
    move |email: web::Path<String>| {
        let action = action.clone();
        async move {
            let user = action.execute(&email)?;
            Ok::<_, AppError>(HttpResponse::Ok().json(UserResponse::from(user)))
        }
    }
}
