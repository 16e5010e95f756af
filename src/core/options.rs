//! 등록 옵션
//!
//! 싱글톤 여부와 값이 만족하는 인터페이스(`dyn Trait`) 목록을 담습니다.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::service::{AnyArc, Casts};

/// 서비스 등록 옵션
///
/// ```rust,ignore
/// dc.register_struct(
///     "crypto",
///     Options::<Crypto>::new()
///         .singleton()
///         .bind::<dyn PasswordHasher>(|s| s),
/// );
/// ```
pub struct Options<T> {
    pub(crate) singleton: bool,
    pub(crate) casts: Casts,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> Options<T> {
    /// 기본 옵션: 해석할 때마다 생성자를 다시 실행하고 구체 타입 할당만 허용합니다.
    pub fn new() -> Self {
        Self {
            singleton: false,
            casts: Casts::identity::<T>(),
            _marker: PhantomData,
        }
    }

    /// 첫 생성 결과를 서비스 이름 아래에 영구히 캐시합니다.
    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// 값이 인터페이스 `I`를 구현함을 선언합니다.
    ///
    /// 변환 함수는 보통 `|s| s` 입니다. 컴파일러가 `Arc<T>`에서 `Arc<dyn Trait>`로의
    /// 변환을 검증하므로 구현하지 않은 트레이트는 등록 단계에서 컴파일되지 않습니다.
    pub fn bind<I: ?Sized + 'static>(mut self, cast: fn(Arc<T>) -> Arc<I>) -> Self {
        self.casts.insert::<I>(Arc::new(move |value: AnyArc| {
            value.downcast::<T>().ok().map(cast)
        }));
        self
    }

    pub fn is_singleton(&self) -> bool {
        self.singleton
    }
}

impl<T: Send + Sync + 'static> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::Service;

    trait Named: Send + Sync {
        fn name(&self) -> &str;
    }

    struct Alice;

    impl Named for Alice {
        fn name(&self) -> &str {
            "alice"
        }
    }

    #[test]
    fn test_default_is_transient() {
        let options = Options::<Alice>::default();

        assert!(!options.is_singleton());
        assert!(options.singleton().is_singleton());
    }

    #[test]
    fn test_bind_adds_interface() {
        let options = Options::<Alice>::new().bind::<dyn Named>(|s| s);
        let service = Service::new(Arc::new(Alice), Arc::new(options.casts));

        assert_eq!(service.cast::<dyn Named>().unwrap().name(), "alice");
        assert!(service.cast::<Alice>().is_some());
    }
}
