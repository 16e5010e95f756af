//! # Named Service Container
//!
//! 이름으로 등록된 생성자와 싱글톤 캐시를 관리하는 의존성 주입 컨테이너입니다.
//!
//! ## 생명주기
//!
//! ```text
//! Open ──register_*──▶ Open ──lock/check──▶ Locked ──get/provide──▶ ...
//!   │
//!   └─ 등록 실패 ──▶ Poisoned(err) ── lock ──▶ Err(err) (상태 유지)
//! ```
//!
//! - 등록 호출은 `&Self`를 반환하므로 체이닝할 수 있고, 첫 번째 등록 에러만 기록됩니다.
//! - `Locked` 또는 `Poisoned` 상태에서의 등록은 무시됩니다.
//! - 해석(`get`, `provide`, `provide_struct`, `provide_handler`)은 `Locked` 상태에서만 가능합니다.
//!
//! ## 예약된 이름
//!
//! `"di"`는 항상 컨테이너 자신으로 해석됩니다.
//!
//! ```rust,ignore
//! let dc = Container::new();
//! dc.register_instance("foo", "bar".to_string())
//!     .register_struct("a", Options::<A>::new())
//!     .register_func("repo", make_repo, Options::new().singleton());
//! dc.check(&Context::background())?;
//!
//! let foo: Arc<String> = dc.resolve(&ctx, "foo")?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error, info, warn};
use once_cell::sync::Lazy;

use crate::core::context::Context;
use crate::core::errors::{DiError, DiResult};
use crate::core::factory::{Assemble, Factory, Params};
use crate::core::options::Options;
use crate::core::service::{Casts, Service, Slot};
use crate::core::wiring::{Dependency, Wire, Wiring};
use crate::utils::display_terminal::{print_boxed_title, print_step_start, print_sub_task, print_final_summary};
use crate::utils::string_utils::is_blank;

/// 컨테이너 자신을 가리키는 예약된 서비스 이름
pub const SELF_NAME: &str = "di";

static SELF_CASTS: Lazy<Arc<Casts>> = Lazy::new(|| Arc::new(Casts::identity::<Container>()));

type Build = Box<dyn Fn(&Context, &Container) -> DiResult<Service> + Send + Sync>;

enum State {
    Open,
    Poisoned(DiError),
    Locked,
}

/// 등록된 생성자
struct Constructor {
    kind: &'static str,
    type_name: &'static str,
    dependencies: Vec<Dependency>,
    build: Build,
    /// 싱글톤이면 첫 성공 결과가 저장됨
    memo: Option<RwLock<Option<Service>>>,
}

impl Constructor {
    fn invoke(&self, ctx: &Context, container: &Container) -> DiResult<Service> {
        let Some(memo) = &self.memo else {
            return (self.build)(ctx, container);
        };

        if let Some(service) = read(memo).as_ref() {
            return Ok(service.clone());
        }

        // 락을 잡지 않은 채 생성해야 중첩 해석이 막히지 않음
        let service = (self.build)(ctx, container)?;
        Ok(write(memo).get_or_insert(service).clone())
    }
}

enum Entry {
    Instance(Service),
    Constructor(Constructor),
}

struct Registry {
    state: RwLock<State>,
    constructors: RwLock<HashMap<String, Arc<Constructor>>>,
    singletons: RwLock<HashMap<String, Service>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// 의존성 주입 컨테이너 핸들
///
/// 복제본은 모두 같은 레지스트리를 공유합니다.
#[derive(Clone)]
pub struct Container {
    inner: Arc<Registry>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Registry {
                state: RwLock::new(State::Open),
                constructors: RwLock::new(HashMap::new()),
                singletons: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// 값을 그대로 싱글톤 캐시에 등록합니다. 구체 타입 할당만 허용됩니다.
    pub fn register_instance<T: Send + Sync + 'static>(&self, name: &str, value: T) -> &Self {
        self.register_instance_with(name, value, Options::new())
    }

    /// 인터페이스 바인딩과 함께 값을 등록합니다.
    ///
    /// 인스턴스는 항상 캐시되므로 `singleton` 옵션은 의미가 없습니다.
    pub fn register_instance_with<T: Send + Sync + 'static>(
        &self,
        name: &str,
        value: T,
        options: Options<T>,
    ) -> &Self {
        let service = Service::new(Arc::new(value), Arc::new(options.casts));
        self.register(name, Entry::Instance(service))
    }

    /// 구조체 타입을 등록합니다.
    ///
    /// 해석할 때마다 `T::default()`로 새 값을 만들고 태그된 필드를 주입합니다.
    pub fn register_struct<T>(&self, name: &str, options: Options<T>) -> &Self
    where
        T: Wire + Default + Send + Sync + 'static,
    {
        let memo = options.is_singleton().then(|| RwLock::new(None));
        let casts = Arc::new(options.casts);
        let build: Build = Box::new(move |ctx, container| {
            let mut value = T::default();
            value.wire(&mut Wiring::new(ctx, container))?;
            Ok(Service::new(Arc::new(value), casts.clone()))
        });

        self.register(
            name,
            Entry::Constructor(Constructor {
                kind: "struct",
                type_name: std::any::type_name::<T>(),
                dependencies: <T as Wire>::dependencies(),
                build,
                memo,
            }),
        )
    }

    /// 생성자 함수를 등록합니다.
    ///
    /// 파라미터는 [`Params`] 규칙으로 채워지고, 함수가 반환한 에러는
    /// 서비스 이름이 붙은 `ConstructorFailure`로 감싸집니다.
    pub fn register_func<Args, F>(&self, name: &str, func: F, options: Options<F::Output>) -> &Self
    where
        Args: Params + 'static,
        F: Factory<Args>,
    {
        let memo = options.is_singleton().then(|| RwLock::new(None));
        let casts = Arc::new(options.casts);
        let service_name = name.to_string();
        let build: Build = Box::new(move |ctx, container| {
            let args = <Args as Params>::extract(ctx, container)?;
            let value = func
                .construct(args)
                .map_err(|e| DiError::constructor(&service_name, e))?;
            Ok(Service::new(Arc::new(value), casts.clone()))
        });

        self.register(
            name,
            Entry::Constructor(Constructor {
                kind: "func",
                type_name: std::any::type_name::<F::Output>(),
                dependencies: <Args as Params>::dependencies(),
                build,
                memo,
            }),
        )
    }

    fn register(&self, name: &str, entry: Entry) -> &Self {
        let mut state = write(&self.inner.state);
        match &*state {
            State::Open => {}
            State::Locked => {
                warn!("container is locked, registration of {} ignored", name);
                return self;
            }
            State::Poisoned(e) => {
                warn!("registration of {} ignored, container already failed: {}", name, e);
                return self;
            }
        }

        match self.insert(name, entry) {
            Ok((kind, true)) => debug!("registered {} service {} (singleton)", kind, name),
            Ok((kind, false)) => debug!("registered {} service {}", kind, name),
            Err(e) => {
                warn!("registration failed: {}", e);
                *state = State::Poisoned(e);
            }
        }
        self
    }

    fn insert(&self, name: &str, entry: Entry) -> DiResult<(&'static str, bool)> {
        if is_blank(name) {
            return Err(DiError::InvalidShape {
                name: name.to_string(),
                reason: "service name must not be blank".to_string(),
            });
        }

        let mut constructors = write(&self.inner.constructors);
        let mut singletons = write(&self.inner.singletons);
        if name == SELF_NAME || constructors.contains_key(name) || singletons.contains_key(name) {
            return Err(DiError::RegistrationConflict(name.to_string()));
        }

        match entry {
            Entry::Instance(service) => {
                singletons.insert(name.to_string(), service);
                Ok(("instance", true))
            }
            Entry::Constructor(constructor) => {
                let described = (constructor.kind, constructor.memo.is_some());
                constructors.insert(name.to_string(), Arc::new(constructor));
                Ok(described)
            }
        }
    }

    /// 등록을 마감합니다.
    ///
    /// 기록된 등록 에러가 있으면 상태를 바꾸지 않고 그 에러를 반환합니다.
    /// 이미 잠긴 컨테이너에 다시 호출해도 안전합니다.
    pub fn lock(&self) -> DiResult<()> {
        let mut state = write(&self.inner.state);
        if let State::Poisoned(e) = &*state {
            return Err(e.clone());
        }
        *state = State::Locked;
        Ok(())
    }

    pub fn is_locked(&self) -> bool {
        matches!(*read(&self.inner.state), State::Locked)
    }

    /// 잠근 뒤 모든 생성자를 이름 순으로 한 번씩 실행해 그래프 전체를 검증합니다.
    ///
    /// 싱글톤은 이 과정에서 미리 생성되어 캐시됩니다.
    /// 첫 번째 실패에서 중단하고 실패한 서비스 이름이 붙은 에러를 반환합니다.
    pub fn check(&self, ctx: &Context) -> DiResult<()> {
        self.lock()?;

        let mut names: Vec<String> = read(&self.inner.constructors).keys().cloned().collect();
        names.sort();
        let instances = read(&self.inner.singletons).len();

        print_boxed_title("CONTAINER CHECK");
        print_step_start(1, &format!("Constructing {} services", names.len()));
        for name in &names {
            match self.lookup(ctx, name) {
                Ok(service) => print_sub_task(name, service.type_name()),
                Err(e) => {
                    let e = if e.is_attributed_to(name) {
                        e
                    } else {
                        DiError::constructor(name, e)
                    };
                    error!("container check failed: {}", e);
                    return Err(e);
                }
            }
        }
        print_final_summary(instances, names.len());

        info!("container check passed");
        Ok(())
    }

    /// 이름으로 서비스를 해석합니다.
    ///
    /// 싱글톤 캐시를 먼저 보고, 없으면 생성자를 실행합니다.
    /// 순환 의존성은 감지하지 않으므로 순환 그래프는 스택이 넘칠 때까지 재귀합니다.
    pub fn get(&self, ctx: &Context, name: &str) -> DiResult<Service> {
        self.ensure_locked(name)?;
        self.lookup(ctx, name)
    }

    /// # Panics
    ///
    /// 해석에 실패하면 패닉합니다. 애플리케이션 시작 코드에서만 사용하세요.
    pub fn must_get(&self, ctx: &Context, name: &str) -> Service {
        self.get(ctx, name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// 타입이 지정된 해석: 결과를 `Arc<I>`로 할당합니다.
    pub fn resolve<I: ?Sized + 'static>(&self, ctx: &Context, name: &str) -> DiResult<Arc<I>> {
        self.get(ctx, name)?.assign::<I>(name)
    }

    pub fn must_resolve<I: ?Sized + 'static>(&self, ctx: &Context, name: &str) -> Arc<I> {
        self.resolve::<I>(ctx, name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// 서비스를 해석해 목적지에 씁니다.
    pub fn provide<S: Slot>(&self, ctx: &Context, name: &str, dst: &mut S) -> DiResult<()> {
        self.ensure_locked(name)?;
        self.provide_unchecked(ctx, name, dst)
    }

    pub fn must_provide<S: Slot>(&self, ctx: &Context, name: &str, dst: &mut S) {
        if let Err(e) = self.provide(ctx, name, dst) {
            panic!("{}", e);
        }
    }

    /// 호출자가 소유한 구조체의 태그된 필드를 채웁니다.
    pub fn provide_struct<W: Wire + ?Sized>(&self, ctx: &Context, target: &mut W) -> DiResult<()> {
        self.ensure_locked(std::any::type_name::<W>())?;
        target.wire(&mut Wiring::new(ctx, self))
    }

    pub fn must_provide_struct<W: Wire + ?Sized>(&self, ctx: &Context, target: &mut W) {
        if let Err(e) = self.provide_struct(ctx, target) {
            panic!("{}", e);
        }
    }

    /// 생성자 함수 규칙으로 인자를 조립해 HTTP 핸들러를 만듭니다. 이름으로 등록하지는 않습니다.
    ///
    /// 반환값이 actix-web 핸들러가 아니면 컴파일되지 않습니다.
    ///
    /// ```rust,ignore
    /// let create = dc.must_provide_handler(&ctx, |action: CreateUser| {
    ///     move |body: web::Json<CreateUserRequest>| { .. }
    /// });
    /// App::new().route("/users", web::post().to(create))
    /// ```
    pub fn provide_handler<Args, F, H, HArgs>(&self, ctx: &Context, factory: F) -> DiResult<H>
    where
        Args: Params,
        F: Assemble<Args, Output = H>,
        H: actix_web::Handler<HArgs>,
        HArgs: actix_web::FromRequest + 'static,
        H::Output: actix_web::Responder + 'static,
    {
        self.ensure_locked(std::any::type_name::<H>())?;
        let args = <Args as Params>::extract(ctx, self)?;
        Ok(factory.assemble(args))
    }

    pub fn must_provide_handler<Args, F, H, HArgs>(&self, ctx: &Context, factory: F) -> H
    where
        Args: Params,
        F: Assemble<Args, Output = H>,
        H: actix_web::Handler<HArgs>,
        HArgs: actix_web::FromRequest + 'static,
        H::Output: actix_web::Responder + 'static,
    {
        self.provide_handler(ctx, factory)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// 등록된 모든 서비스 이름 (정렬, `"di"` 포함)
    pub fn services(&self) -> Vec<String> {
        let mut names: Vec<String> = read(&self.inner.constructors)
            .keys()
            .chain(read(&self.inner.singletons).keys())
            .cloned()
            .collect();
        names.push(SELF_NAME.to_string());
        names.sort();
        names
    }

    /// 구조체/함수 등록의 의존성 목록. 인스턴스나 없는 이름이면 `None`.
    pub fn dependencies(&self, name: &str) -> Option<Vec<Dependency>> {
        read(&self.inner.constructors)
            .get(name)
            .map(|c| c.dependencies.clone())
    }

    pub(crate) fn provide_unchecked<S: Slot>(&self, ctx: &Context, name: &str, dst: &mut S) -> DiResult<()> {
        let service = self.lookup(ctx, name)?;
        dst.fill(name, &service)
    }

    fn ensure_locked(&self, name: &str) -> DiResult<()> {
        if self.is_locked() {
            Ok(())
        } else {
            Err(DiError::NotLocked(name.to_string()))
        }
    }

    fn lookup(&self, ctx: &Context, name: &str) -> DiResult<Service> {
        if name == SELF_NAME {
            return Ok(Service::new(Arc::new(self.clone()), SELF_CASTS.clone()));
        }

        if let Some(service) = read(&self.inner.singletons).get(name) {
            return Ok(service.clone());
        }

        let constructor = read(&self.inner.constructors)
            .get(name)
            .cloned()
            .ok_or_else(|| DiError::NotFound(name.to_string()))?;

        debug!("constructing {} ({})", name, constructor.type_name);
        constructor.invoke(ctx, self)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*read(&self.inner.state) {
            State::Open => "open",
            State::Poisoned(_) => "poisoned",
            State::Locked => "locked",
        };
        f.debug_struct("Container")
            .field("state", &state)
            .field("constructors", &read(&self.inner.constructors).len())
            .field("singletons", &read(&self.inner.singletons).len())
            .finish()
    }
}
