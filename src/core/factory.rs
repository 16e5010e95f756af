//! # Function Constructors
//!
//! 함수 시그니처를 보고 인자를 조립하는 규칙입니다.
//! 파라미터가 [`Context`]이면 현재 컨텍스트가, [`Container`]이면 컨테이너 핸들이,
//! 그 외에는 `Default + Wire` 구조체를 새로 만들어 필드를 주입한 값이 전달됩니다.
//!
//! ```rust,ignore
//! fn make_repo(_ctx: Context, deps: RepoDeps) -> Result<UserRepository, DiError> {
//!     Ok(UserRepository::new(deps.pool.clone()))
//! }
//!
//! dc.register_func("user repository", make_repo, Options::new().singleton());
//! ```
//!
//! 시그니처 모양(`Result<T, E>` 반환, 지원되는 파라미터 타입)은 컴파일 타임에 검증됩니다.

use crate::core::container::Container;
use crate::core::context::Context;
use crate::core::errors::{BoxError, DiResult};
use crate::core::wiring::{Dependency, Wire, Wiring};

/// 생성자 함수의 파라미터 하나
pub trait Param: Sized {
    fn extract(ctx: &Context, container: &Container) -> DiResult<Self>;

    /// 이 파라미터가 요구하는 서비스 목록
    fn dependencies() -> Vec<Dependency> {
        Vec::new()
    }
}

impl Param for Context {
    fn extract(ctx: &Context, _container: &Container) -> DiResult<Self> {
        Ok(ctx.clone())
    }
}

impl Param for Container {
    fn extract(_ctx: &Context, container: &Container) -> DiResult<Self> {
        Ok(container.clone())
    }
}

impl<T: Wire + Default> Param for T {
    fn extract(ctx: &Context, container: &Container) -> DiResult<Self> {
        let mut value = T::default();
        value.wire(&mut Wiring::new(ctx, container))?;
        Ok(value)
    }

    fn dependencies() -> Vec<Dependency> {
        <T as Wire>::dependencies()
    }
}

/// 파라미터 튜플
pub trait Params: Sized {
    fn extract(ctx: &Context, container: &Container) -> DiResult<Self>;

    fn dependencies() -> Vec<Dependency>;
}

/// `Fn(A, B, ..) -> Result<T, E>` 형태의 등록 가능한 생성자
pub trait Factory<Args>: Send + Sync + 'static {
    type Output: Send + Sync + 'static;

    fn construct(&self, args: Args) -> Result<Self::Output, BoxError>;
}

/// `FnOnce(A, B, ..) -> H` 형태의 일회성 조립 함수 (핸들러 팩토리용)
pub trait Assemble<Args> {
    type Output;

    fn assemble(self, args: Args) -> Self::Output;
}

macro_rules! factory_tuple {
    ($($param:ident),*) => {
        impl<$($param: Param,)*> Params for ($($param,)*) {
            #[allow(unused_variables)]
            fn extract(ctx: &Context, container: &Container) -> DiResult<Self> {
                Ok(($(<$param as Param>::extract(ctx, container)?,)*))
            }

            fn dependencies() -> Vec<Dependency> {
                #[allow(unused_mut)]
                let mut deps = Vec::new();
                $( deps.extend(<$param as Param>::dependencies()); )*
                deps
            }
        }

        impl<Func, T, E, $($param,)*> Factory<($($param,)*)> for Func
        where
            Func: Fn($($param),*) -> Result<T, E> + Send + Sync + 'static,
            T: Send + Sync + 'static,
            E: Into<BoxError>,
        {
            type Output = T;

            #[allow(non_snake_case)]
            fn construct(&self, ($($param,)*): ($($param,)*)) -> Result<T, BoxError> {
                (self)($($param),*).map_err(Into::into)
            }
        }

        impl<Func, H, $($param,)*> Assemble<($($param,)*)> for Func
        where
            Func: FnOnce($($param),*) -> H,
        {
            type Output = H;

            #[allow(non_snake_case)]
            fn assemble(self, ($($param,)*): ($($param,)*)) -> H {
                (self)($($param),*)
            }
        }
    };
}

factory_tuple!();
factory_tuple!(A);
factory_tuple!(A, B);
factory_tuple!(A, B, C);
factory_tuple!(A, B, C, D);
factory_tuple!(A, B, C, D, E1);
factory_tuple!(A, B, C, D, E1, F);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::Dep;
    use crate::{DiError, wired};

    wired! {
        #[derive(Default)]
        struct Deps {
            #[di("foo")]
            foo: Dep<String>,
        }
    }

    fn locked() -> Container {
        let dc = Container::new();
        dc.register_instance("foo", "bar".to_string());
        dc.lock().unwrap();
        dc
    }

    #[test]
    fn test_params_extract_context_container_and_structs() {
        let dc = locked();
        let ctx = Context::background();

        let (c, inner, deps) = <(Context, Container, Deps) as Params>::extract(&ctx, &dc).unwrap();
        assert!(!c.is_done());
        assert!(inner.is_locked());
        assert_eq!(deps.foo.as_str(), "bar");
    }

    #[test]
    fn test_params_dependencies_skip_context() {
        let deps = <(Context, Deps) as Params>::dependencies();

        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].service, "foo");
    }

    #[test]
    fn test_factory_maps_error() {
        let failing = |_: Context| -> Result<u32, DiError> { Err(DiError::NotFound("x".to_string())) };

        let err = Factory::construct(&failing, (Context::background(),)).unwrap_err();
        assert_eq!(err.to_string(), "service x not found");
    }

    #[test]
    fn test_assemble_calls_once() {
        let text = String::from("once");
        let consume = move |deps: Deps| format!("{}:{}", text, Dep::is_wired(&deps.foo));

        assert_eq!(consume.assemble((Deps::default(),)), "once:false");
    }
}
