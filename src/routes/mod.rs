//! API 라우트 설정 모듈
//!
//! 핸들러는 컨테이너에서 조립되므로 라우트 설정 함수는 컨테이너와 컨텍스트를 함께 받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &dc, &ctx));
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::{Container, Context};
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Panics
///
/// 핸들러 의존성을 해석할 수 없으면 패닉합니다.
/// 서버 시작 전에 `Container::check`로 그래프를 검증해 두어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, dc: &Container, ctx: &Context) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg, dc, ctx);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users/{email}` - 사용자 조회
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"me@example.com","name":"test","password":"SecurePass123"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig, dc: &Container, ctx: &Context) {
    let create_user = dc.must_provide_handler(ctx, handlers::users::create_user);
    let get_user = dc.must_provide_handler(ctx, handlers::users::get_user);

    cfg.service(
        web::scope("/api/v1/users")
            .route("", web::post().to(create_user))
            .route("/{email}", web::get().to(get_user)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "di_container",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "dependency_injection": "Named Container"
        }
    }))
}
