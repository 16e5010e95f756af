//! 생성자에 전달되는 앰비언트 컨텍스트
//!
//! 컨테이너는 컨텍스트를 검사하지 않고 그대로 생성자에게 넘깁니다.
//! 취소와 타임아웃을 지키는 것은 생성자의 책임입니다.

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// 취소 가능한 앰비언트 컨텍스트
///
/// 복제본들은 같은 취소 토큰을 공유합니다. `child`로 만든 하위 컨텍스트는
/// 부모가 취소되면 함께 취소되지만, 하위 컨텍스트의 취소는 부모에 영향을 주지 않습니다.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// 취소되지 않고 마감 시간도 없는 최상위 컨텍스트를 생성합니다.
    pub fn background() -> Self {
        Self::default()
    }

    /// 지정된 시간 이후 만료되는 하위 컨텍스트를 생성합니다.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// 마감 시각을 가진 하위 컨텍스트를 생성합니다.
    ///
    /// 부모의 마감 시각이 더 이르면 부모의 것을 유지합니다.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// 부모와 마감 시각을 공유하는 하위 컨텍스트를 생성합니다.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// 이 컨텍스트와 모든 하위 컨텍스트를 취소합니다.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 취소되었거나 마감 시각이 지났는지 확인합니다.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// 비동기 코드에서 `cancelled().await`로 기다릴 수 있는 토큰
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_not_done() {
        let ctx = Context::background();

        assert!(!ctx.is_done());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_cancel_propagates_to_children_only() {
        let parent = Context::background();
        let child = parent.child();
        let grandchild = child.child();

        grandchild.cancel();
        assert!(grandchild.is_done());
        assert!(!child.is_done());

        parent.cancel();
        assert!(child.is_cancelled());
        assert!(parent.clone().is_cancelled());
    }

    #[test]
    fn test_expired_deadline_is_done() {
        let ctx = Context::background().with_timeout(Duration::ZERO);

        assert!(ctx.is_done());
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_child_keeps_earlier_deadline() {
        let parent = Context::background().with_timeout(Duration::from_secs(1));
        let child = parent.with_timeout(Duration::from_secs(60));

        assert_eq!(child.deadline(), parent.deadline());
    }
}
