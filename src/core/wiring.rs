//! # Struct Field Auto-Wiring
//!
//! 구조체의 의존성 필드를 서비스 이름으로 채우는 규칙을 정의합니다.
//! 타입마다 "어떤 필드에 어떤 서비스를 주입하는가"를 기술하는 [`Wire`] 구현이
//! 의존성 기술자(descriptor) 역할을 합니다.
//!
//! ## 태그 문법
//!
//! [`wired!`](crate::wired) 매크로 안에서 필드에 `#[di("서비스 이름")]`을 붙이면
//! 해당 필드가 컨테이너 관리 대상이 됩니다. 태그가 없는 필드는 건드리지 않습니다.
//!
//! ```rust,ignore
//! use di_container::{Dep, wired};
//!
//! wired! {
//!     #[derive(Default)]
//!     pub struct GetUser {
//!         #[di("user repository")]
//!         pub repo: Dep<dyn UserStore>,
//!         pub calls: u32,
//!     }
//! }
//! ```
//!
//! ## 실패 처리
//!
//! 첫 번째로 실패한 필드에서 전체 주입이 중단되고 그 필드의 에러가 그대로 전파됩니다.
//! 일부만 채워진 구조체가 성공으로 반환되는 일은 없습니다.

use std::any::type_name;

use log::trace;

use crate::core::container::Container;
use crate::core::context::Context;
use crate::core::errors::DiResult;
use crate::core::service::Slot;

/// 의존성 기술자의 한 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// 필드 또는 파라미터 이름
    pub field: &'static str,
    /// 주입할 서비스 이름
    pub service: String,
    /// 선언된 목적지 타입
    pub declared: &'static str,
}

impl Dependency {
    pub fn new<S: ?Sized>(field: &'static str, service: &str) -> Self {
        Self {
            field,
            service: service.to_string(),
            declared: type_name::<S>(),
        }
    }
}

/// 컨테이너가 필드를 채울 수 있는 구조체
///
/// 보통은 [`wired!`](crate::wired) 매크로가 구현하지만 직접 구현해도 됩니다.
///
/// ```rust,ignore
/// impl Wire for Comb {
///     fn wire(&mut self, wiring: &mut Wiring<'_>) -> DiResult<()> {
///         wiring.inject("a", "a", &mut self.a)?;
///         wiring.inject("b", "b", &mut self.b)
///     }
/// }
/// ```
pub trait Wire {
    fn wire(&mut self, wiring: &mut Wiring<'_>) -> DiResult<()>;

    /// 태그가 붙은 필드 목록 (선언 순서)
    fn dependencies() -> Vec<Dependency>
    where
        Self: Sized,
    {
        Vec::new()
    }
}

/// 한 번의 구조체 주입 동안 살아 있는 해석 핸들
pub struct Wiring<'a> {
    ctx: &'a Context,
    container: &'a Container,
}

impl<'a> Wiring<'a> {
    pub(crate) fn new(ctx: &'a Context, container: &'a Container) -> Self {
        Self { ctx, container }
    }

    /// 서비스 `service`를 해석해 `slot`에 씁니다.
    pub fn inject<S: Slot>(&mut self, field: &'static str, service: &str, slot: &mut S) -> DiResult<()> {
        trace!("wiring field {} <- {}", field, service);
        self.container.provide_unchecked(self.ctx, service, slot)
    }

    pub fn context(&self) -> &Context {
        self.ctx
    }
}

/// `#[di("...")]` 태그로 [`Wire`]를 구현하는 구조체를 선언합니다.
///
/// 필드에는 `#[di(..)]` 외의 속성을 붙일 수 없습니다.
/// 새 인스턴스를 만드는 등록(`register_struct`, 함수 파라미터)에는 `Default`가 필요하므로
/// 보통 `#[derive(Default)]`를 함께 붙입니다.
#[macro_export]
macro_rules! wired {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[di($service:expr)])?
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $field : $fty ),*
        }

        impl $crate::Wire for $name {
            #[allow(unused_variables)]
            fn wire(&mut self, wiring: &mut $crate::Wiring<'_>) -> $crate::DiResult<()> {
                $( $(
                    wiring.inject(stringify!($field), $service, &mut self.$field)?;
                )? )*
                ::core::result::Result::Ok(())
            }

            fn dependencies() -> ::std::vec::Vec<$crate::Dependency> {
                ::std::vec![
                    $( $(
                        $crate::Dependency::new::<$fty>(stringify!($field), $service),
                    )? )*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::service::Dep;
    use crate::{Container, Context, DiError, Wire};

    wired! {
        #[derive(Default)]
        struct Greeting {
            #[di("foo")]
            foo: Dep<String>,
            untouched: u32,
            #[di("count")]
            count: Option<std::sync::Arc<u64>>,
        }
    }

    wired! {
        #[derive(Default)]
        struct Empty {}
    }

    fn locked() -> Container {
        let dc = Container::new();
        dc.register_instance("foo", "bar".to_string())
            .register_instance("count", 7u64);
        dc.lock().unwrap();
        dc
    }

    #[test]
    fn test_descriptor_lists_tagged_fields_in_order() {
        let deps = Greeting::dependencies();

        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].field, "foo");
        assert_eq!(deps[0].service, "foo");
        assert!(deps[0].declared.contains("Dep<alloc::string::String>"));
        assert_eq!(deps[1].field, "count");
        assert!(Empty::dependencies().is_empty());
    }

    #[test]
    fn test_untagged_fields_are_untouched() {
        let dc = locked();
        let mut greeting = Greeting {
            untouched: 42,
            ..Default::default()
        };

        dc.provide_struct(&Context::background(), &mut greeting).unwrap();
        assert_eq!(greeting.foo.as_str(), "bar");
        assert_eq!(greeting.count.as_deref(), Some(&7));
        assert_eq!(greeting.untouched, 42);
    }

    #[test]
    fn test_first_failing_field_aborts() {
        let dc = Container::new();
        dc.register_instance("foo", 1u8);
        dc.lock().unwrap();
        let mut greeting = Greeting::default();

        let err = dc
            .provide_struct(&Context::background(), &mut greeting)
            .unwrap_err();
        assert!(matches!(err, DiError::TypeMismatch { name, .. } if name == "foo"));
        assert!(greeting.count.is_none());
    }

    #[test]
    fn test_empty_struct_wires() {
        let dc = locked();
        dc.provide_struct(&Context::background(), &mut Empty::default())
            .unwrap();
    }
}
