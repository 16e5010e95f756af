//! DI 컨테이너 데모 애플리케이션
//!
//! 환경 설정을 읽고, 모든 서비스를 컨테이너에 등록해 그래프 전체를 검증한 뒤
//! Actix-web 기반의 HTTP 서버를 구동합니다.

use std::io;

use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use di_container::config::AppConfig;
use di_container::routes::configure_all_routes;
use di_container::services::register_all_services;
use di_container::{Container, Context};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 DI 컨테이너 데모 서비스 시작중...");

    let config = AppConfig::from_env();
    let bind_address = config.bind_address();
    info!("Current environment: {:?}", config.environment);

    let ctx = Context::background();
    let dc = Container::new();
    register_all_services(&dc, config);

    // 서빙 전에 의존성 그래프 전체를 검증
    let started = std::time::Instant::now();
    if let Err(e) = dc.check(&ctx) {
        error!("컨테이너 검증 실패: {}", e);
        return Err(io::Error::other(e));
    }
    info!("✅ 컨테이너 준비 완료 ({:.2?})", started.elapsed());

    let result = start_http_server(dc, ctx.clone(), &bind_address).await;

    // 서버 종료 시 생성자에 전달된 컨텍스트도 함께 취소
    ctx.cancel();
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 각 워커는 같은 컨테이너에서 핸들러를 조립합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(dc: Container, ctx: Context, bind_address: &str) -> io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &dc, &ctx))
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=di_container::core=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
