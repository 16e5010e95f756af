//! 터미널 출력 포맷팅 유틸리티
//!
//! 컨테이너 검증(`check`) 과정을 박스 제목, 진행 단계, 하위 항목 형태로 로그에 남깁니다.
//! 모든 출력은 `log` 파사드의 `info` 레벨로 기록됩니다.

use log::info;

const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 CONTAINER CHECK                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title(title) {
        info!("{}", line);
    }
}

fn boxed_title(title: &str) -> [String; 3] {
    let border = "═".repeat(CONTENT_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = CONTENT_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Constructing 4 services
/// ```
pub fn print_step_start(step: u8, description: &str) {
    info!("→ Step {}: {}", step, description);
}

/// 하위 항목의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ user repository: di_container::repositories::users::user_repo::UserRepository
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    info!("   ├─ {}: {}", name, status);
}

/// 최종 요약을 출력합니다
pub fn print_final_summary(instances: usize, constructors: usize) {
    print_boxed_title("CONTAINER READY");
    info!("   📦 Instances: {}", instances);
    info!("   🔧 Constructors: {}", constructors);
    info!("   🚀 Total Services: {}", instances + constructors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let [top, middle, bottom] = boxed_title("ok");

        assert_eq!(top.chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(middle.chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(top.replace('╔', "╚").replace('╗', "╝"), bottom);
        assert!(middle.contains(&format!("{:^50}", "ok")));
    }
}
