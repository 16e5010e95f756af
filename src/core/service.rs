//! # Resolved Services & Typed Assignment
//!
//! 생성자가 만들어 낸 값은 타입이 지워진 [`Service`]로 컨테이너를 통과하고,
//! 호출자의 목적지(destination)에 쓰이는 순간에만 타입 검사를 받습니다.
//!
//! ## 능력 테이블 (Casts)
//!
//! Rust에는 "이 값이 임의의 트레이트를 구현하는가?"를 런타임에 묻는 리플렉션이 없으므로,
//! 등록 시점에 값이 만족하는 목적지 타입을 모두 테이블로 기록합니다.
//!
//! ```text
//! TypeId::of::<Arc<T>>()         → identity (구체 타입 할당)
//! TypeId::of::<Arc<dyn Trait>>() → |v| v.downcast::<T>().map(|s| s as Arc<dyn Trait>)
//! ```
//!
//! 목적지 `Arc<I>`의 항목이 없으면 구체 타입이든 인터페이스든 `TypeMismatch`입니다.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::core::errors::{DiError, DiResult};

/// 타입이 지워진 서비스 값
pub type AnyArc = Arc<dyn Any + Send + Sync>;

type CastFn<I> = Arc<dyn Fn(AnyArc) -> Option<Arc<I>> + Send + Sync>;

/// 목적지 타입별 변환 함수 테이블
#[derive(Default)]
pub(crate) struct Casts {
    table: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Casts {
    /// 구체 타입 `T` 자신으로의 할당만 허용하는 테이블
    pub(crate) fn identity<T: Send + Sync + 'static>() -> Self {
        let mut casts = Self::default();
        casts.insert::<T>(Arc::new(|value: AnyArc| value.downcast::<T>().ok()));
        casts
    }

    pub(crate) fn insert<I: ?Sized + 'static>(&mut self, cast: CastFn<I>) {
        self.table.insert(TypeId::of::<Arc<I>>(), Box::new(cast));
    }

    fn get<I: ?Sized + 'static>(&self) -> Option<&CastFn<I>> {
        self.table
            .get(&TypeId::of::<Arc<I>>())?
            .downcast_ref::<CastFn<I>>()
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}

/// 해석된 서비스 값
///
/// 값 자체와 구체 타입 이름, 그리고 등록 시 선언된 능력 테이블을 함께 들고 다닙니다.
/// 복제는 `Arc` 두 개의 참조 카운트 증가뿐입니다.
#[derive(Clone)]
pub struct Service {
    value: AnyArc,
    type_name: &'static str,
    casts: Arc<Casts>,
}

impl Service {
    pub(crate) fn new<T: Send + Sync + 'static>(value: Arc<T>, casts: Arc<Casts>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
            casts,
        }
    }

    /// 구체 타입 이름 (에러 메시지와 로그용)
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 목적지 `Arc<I>`로 변환합니다. 호환되지 않으면 `None`.
    ///
    /// `I`는 등록된 구체 타입이거나 `Options::bind`로 선언한 `dyn Trait`이어야 합니다.
    pub fn cast<I: ?Sized + 'static>(&self) -> Option<Arc<I>> {
        let cast = self.casts.get::<I>()?;
        cast(self.value.clone())
    }

    /// 타입 검사 후 할당 가능한 값을 돌려줍니다.
    pub fn assign<I: ?Sized + 'static>(&self, name: &str) -> DiResult<Arc<I>> {
        self.cast::<I>().ok_or_else(|| DiError::TypeMismatch {
            name: name.to_string(),
            actual: self.type_name,
            expected: type_name::<Arc<I>>(),
        })
    }

    /// 두 핸들이 같은 인스턴스를 가리키는지 확인합니다.
    pub fn ptr_eq(&self, other: &Service) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("type_name", &self.type_name)
            .field("casts", &self.casts.len())
            .finish()
    }
}

/// 해석된 값을 받을 수 있는 목적지
///
/// 필드 자동 주입(`Wiring::inject`)과 `Container::provide`가 같은 규칙으로 값을 씁니다.
pub trait Slot {
    fn fill(&mut self, name: &str, service: &Service) -> DiResult<()>;
}

/// 타입이 지정되지 않은 목적지: 어떤 값이든 받습니다.
impl Slot for Service {
    fn fill(&mut self, _name: &str, service: &Service) -> DiResult<()> {
        *self = service.clone();
        Ok(())
    }
}

impl<I: ?Sized + 'static> Slot for Option<Arc<I>> {
    fn fill(&mut self, name: &str, service: &Service) -> DiResult<()> {
        *self = Some(service.assign::<I>(name)?);
        Ok(())
    }
}

/// 주입되는 의존성 필드
///
/// 기본값은 비어 있고, 주입이 성공하면 항상 값을 가집니다.
/// `I`는 구체 타입이나 `dyn Trait` 모두 가능합니다.
///
/// ```rust,ignore
/// wired! {
///     #[derive(Default)]
///     struct CreateUser {
///         #[di("user repository")]
///         repo: Dep<UserRepository>,
///     }
/// }
/// ```
pub struct Dep<I: ?Sized>(Option<Arc<I>>);

/// `Dep`은 `Deref`로 대상 타입의 메서드를 그대로 노출하므로,
/// 자체 기능은 `Arc`처럼 연관 함수(`Dep::is_wired(&dep)`)로만 제공합니다.
impl<I: ?Sized> Dep<I> {
    /// 이미 만들어진 값으로 채워진 의존성 (테스트와 수동 조립용)
    pub fn new(value: Arc<I>) -> Self {
        Self(Some(value))
    }

    pub fn is_wired(this: &Self) -> bool {
        this.0.is_some()
    }

    pub fn as_arc(this: &Self) -> Option<&Arc<I>> {
        this.0.as_ref()
    }

    pub fn into_inner(this: Self) -> Option<Arc<I>> {
        this.0
    }
}

impl<I: ?Sized> Default for Dep<I> {
    fn default() -> Self {
        Self(None)
    }
}

impl<I: ?Sized> Clone for Dep<I> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<I: ?Sized> Deref for Dep<I> {
    type Target = I;

    /// # Panics
    ///
    /// 주입되지 않은 의존성을 역참조하면 패닉합니다.
    fn deref(&self) -> &I {
        match &self.0 {
            Some(value) => &**value,
            None => panic!("dependency {} is not wired", type_name::<I>()),
        }
    }
}

impl<I: ?Sized> fmt::Debug for Dep<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if Dep::is_wired(self) { "wired" } else { "empty" };
        write!(f, "Dep<{}>({})", type_name::<I>(), state)
    }
}

impl<I: ?Sized + 'static> Slot for Dep<I> {
    fn fill(&mut self, name: &str, service: &Service) -> DiResult<()> {
        self.0 = Some(service.assign::<I>(name)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    trait Farewell: Send + Sync {}

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    fn english() -> Service {
        let mut casts = Casts::identity::<English>();
        let to_greeter: fn(Arc<English>) -> Arc<dyn Greeter> = |s| s;
        casts.insert::<dyn Greeter>(Arc::new(move |v: AnyArc| {
            v.downcast::<English>().ok().map(to_greeter)
        }));
        Service::new(Arc::new(English), Arc::new(casts))
    }

    #[test]
    fn test_concrete_assignment() {
        let service = english();

        assert!(service.assign::<English>("en").is_ok());
        assert!(matches!(
            service.assign::<String>("en"),
            Err(DiError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_interface_assignment() {
        let service = english();

        let greeter = service.assign::<dyn Greeter>("en").unwrap();
        assert_eq!(greeter.greet(), "hello");
        assert!(matches!(
            service.assign::<dyn Farewell>("en"),
            Err(DiError::TypeMismatch { name, .. }) if name == "en"
        ));
    }

    #[test]
    fn test_untyped_slot_accepts_anything() {
        let service = english();
        let mut dst = Service::new(Arc::new(0u8), Arc::new(Casts::identity::<u8>()));

        dst.fill("en", &service).unwrap();
        assert!(dst.ptr_eq(&service));
        assert!(dst.type_name().ends_with("English"));
    }

    #[test]
    fn test_dep_slot() {
        let service = english();
        let mut dep: Dep<dyn Greeter> = Dep::default();
        assert!(!Dep::is_wired(&dep));

        dep.fill("en", &service).unwrap();
        assert!(Dep::is_wired(&dep));
        assert_eq!(dep.greet(), "hello");
    }

    #[test]
    fn test_failed_fill_leaves_dep_empty() {
        let service = english();
        let mut dep: Dep<u32> = Dep::default();

        assert!(dep.fill("en", &service).is_err());
        assert!(!Dep::is_wired(&dep));
    }

    #[test]
    #[should_panic(expected = "is not wired")]
    fn test_empty_dep_deref_panics() {
        let dep: Dep<String> = Dep::default();
        let _ = dep.len();
    }

    trait Directory: Send + Sync {
        fn get(&self, key: &str) -> String;
        fn into_inner(&self) -> usize;
    }

    struct Phonebook;

    impl Directory for Phonebook {
        fn get(&self, key: &str) -> String {
            format!("number of {}", key)
        }

        fn into_inner(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_dep_method_calls_reach_pointee_trait() {
        let dep: Dep<dyn Directory> = Dep::new(Arc::new(Phonebook));

        assert_eq!(dep.get("kim"), "number of kim");
        assert_eq!(dep.into_inner(), 1);
        assert!(Dep::as_arc(&dep).is_some());
    }
}
