//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 배달 백엔드의 모든 리포지토리와 서비스를 단일 인스턴스로 관리하는 레지스트리입니다.
//! `#[service]`, `#[repository]` 매크로가 `inventory`에 등록 정보를 제출하면,
//! 이 모듈이 타입 이름을 기준으로 인스턴스를 찾아 `Arc<T>` 필드에 주입합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[repository] 매크로 → RepositoryRegistration 제출
//!    ├─ #[service] 매크로 → ServiceRegistration 제출
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화 (main)
//!    ├─ Database, DistanceMatrixClient 직접 등록 (ServiceLocator::set)
//!    └─ ServiceLocator::initialize_all() → 리포지토리, 서비스 순서로 생성
//!
//! 3. 의존성 주입
//!    ├─ Arc<T> 필드 → ServiceLocator::get::<T>() 호출
//!    ├─ "RiderRepository" → "rider" 로 정규화 후 등록 정보 검색
//!    └─ 생성된 인스턴스 캐싱
//! ```
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Repository`/`Service` 접미사를 떼고 소문자로 바꾼 값이
//! 매크로의 `name` 인자와 같아야 합니다. 예를 들어 `FoodItemRepository`는
//! `#[repository(name = "fooditem")]`로 등록해야 합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `#[service]` 매크로에 의해 생성되어 `inventory`로 수집됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (`{name}_service`)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// `#[repository]` 매크로에 의해 생성되어 `inventory`로 수집됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (`{name}_repository`)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록된 이름에서 `_service`/`_repository` 접미사를 제거합니다.
fn extract_clean_name_static(name: &str) -> String {
    if let Some(stripped) = name.strip_suffix("_service") {
        stripped.to_string()
    } else if let Some(stripped) = name.strip_suffix("_repository") {
        stripped.to_string()
    } else {
        name.to_string()
    }
}

/// 초기화 중 표시를 스코프 종료 시 해제하는 가드
///
/// 생성자가 패닉하더라도 `initializing` 집합에 타입이 남지 않습니다.
struct InitializingGuard(TypeId);

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        if let Ok(mut initializing) = LOCATOR.initializing.write() {
            initializing.remove(&self.0);
        }
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// - **싱글톤 보장**: 각 타입당 하나의 인스턴스만 캐싱
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **순환 참조 감지**: 초기화 중인 타입을 추적
pub struct ServiceLocator {
    /// `TypeId`를 키로 하는 인스턴스 캐시
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// ## 처리 과정
    ///
    /// 1. 캐시 확인: 이미 생성되었거나 `set()`으로 등록된 인스턴스 반환
    /// 2. 순환 참조 검사: 현재 생성 중인 타입이면 패닉
    /// 3. 타입 분석: `OrderService` → 서비스 레지스트리의 `order`
    /// 4. 인스턴스 생성: 등록된 생성자 호출 (락을 잡지 않은 상태)
    /// 5. 캐싱
    ///
    /// 생성자 안에서 다른 의존성을 다시 `get()`으로 해결하므로,
    /// 4단계는 인스턴스 캐시의 쓰기 락 밖에서 수행됩니다.
    ///
    /// # Panics
    ///
    /// - 순환 참조 (A → B → A)
    /// - 레지스트리에 없고 `set()`으로도 등록되지 않은 타입
    /// - 등록된 생성자가 다른 타입을 반환하는 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if !initializing.insert(type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        let _guard = InitializingGuard(type_id);

        let instance = Self::construct::<T>(type_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone()
            .downcast::<T>()
            .expect("Type mismatch in ServiceLocator")
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances.get(&type_id).map(|instance| {
            instance.clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator")
        })
    }

    /// 레지스트리에서 생성자를 찾아 인스턴스를 만듭니다.
    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        if let Some(base) = clean_type_name.strip_suffix("Repository") {
            let entity_name = base.to_lowercase();
            let registration = REPOSITORY_NAME_CACHE
                .get(&entity_name)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", entity_name));

            return (registration.constructor)()
                .downcast::<Arc<T>>()
                .map(|boxed| *boxed)
                .unwrap_or_else(|_| panic!("Type mismatch for repository: {}", registration.name));
        }

        if let Some(base) = clean_type_name.strip_suffix("Service") {
            let entity_name = base.to_lowercase();
            let registration = SERVICE_NAME_CACHE
                .get(&entity_name)
                .unwrap_or_else(|| panic!("No service found for entity: {}", entity_name));

            return (registration.constructor)()
                .downcast::<Arc<T>>()
                .map(|boxed| *boxed)
                .unwrap_or_else(|_| panic!("Type mismatch for service: {}", registration.name));
        }

        panic!("Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()", type_name);
    }

    /// `food_delivery_backend::services::orders::order_service::OrderService` → `OrderService`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(`Database`, `DistanceMatrixClient`)를
    /// `initialize_all()` 전에 등록할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// ServiceLocator::set(Arc::new(Database::new().await?));
    /// ServiceLocator::set(Arc::new(DistanceMatrixClient::new()?));
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 서비스와 리포지토리를 초기화합니다.
    ///
    /// 리포지토리를 먼저 생성하고, 그 다음 서비스를 생성합니다.
    /// 요청 처리 중에 지연 초기화가 일어나지 않도록 서버 시작 전에 호출합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
