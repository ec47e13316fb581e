//! Application wiring.
//!
//! Builds every component from configuration and hands out the services as
//! trait objects. The cache store is injected into the orchestrator here and
//! nowhere else.

use registrar_cache::{CacheAside, CacheStore, RedisCacheStore, StoreAdapter, TtlPolicy};
use registrar_config::AppConfig;
use registrar_core::{HealthCheck, HealthStatus, RegistrarResult};
use registrar_repository::{
    InMemorySchoolYearRepository, InMemorySectionRepository, InMemoryStudentRepository,
    InMemoryUserRepository,
};
use registrar_service::{
    SchoolYearService, SchoolYearServiceImpl, SectionService, SectionServiceImpl, StudentService,
    StudentServiceImpl, UserService, UserServiceImpl,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Fully wired application.
#[derive(Clone)]
pub struct App {
    health_checks: Vec<Arc<dyn HealthCheck>>,
    students: Arc<dyn StudentService>,
    users: Arc<dyn UserService>,
    school_years: Arc<dyn SchoolYearService>,
    sections: Arc<dyn SectionService>,
}

impl App {
    /// Builds the application from configuration.
    pub fn build(config: &AppConfig) -> RegistrarResult<Self> {
        let redis = Arc::new(RedisCacheStore::from_config(&config.redis)?);
        let store: Arc<dyn CacheStore> = redis.clone();
        let health: Arc<dyn HealthCheck> = redis;
        Ok(Self::with_store(config, store, vec![health]))
    }

    /// Builds the application over an explicit cache store.
    pub fn with_store(
        config: &AppConfig,
        store: Arc<dyn CacheStore>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
    ) -> Self {
        let adapter = StoreAdapter::from_config(store, &config.cache, &config.redis);
        let cache = Arc::new(CacheAside::new(adapter, TtlPolicy::from_config(&config.cache.ttl)));

        let student_repository = Arc::new(InMemoryStudentRepository::new());
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let school_year_repository = Arc::new(InMemorySchoolYearRepository::new());
        let section_repository = Arc::new(InMemorySectionRepository::new());

        info!(
            timeout_ms = config.cache.operation_timeout_ms,
            key_prefix = %config.redis.key_prefix,
            "Cache-aside layer initialized"
        );

        Self {
            health_checks,
            students: Arc::new(StudentServiceImpl::new(
                student_repository,
                user_repository.clone(),
                cache.clone(),
            )),
            users: Arc::new(UserServiceImpl::new(user_repository, cache.clone())),
            school_years: Arc::new(SchoolYearServiceImpl::new(
                school_year_repository.clone(),
                section_repository.clone(),
                cache.clone(),
            )),
            sections: Arc::new(SectionServiceImpl::new(
                section_repository,
                school_year_repository,
                cache,
            )),
        }
    }

    #[must_use]
    pub fn students(&self) -> Arc<dyn StudentService> {
        Arc::clone(&self.students)
    }

    #[must_use]
    pub fn users(&self) -> Arc<dyn UserService> {
        Arc::clone(&self.users)
    }

    #[must_use]
    pub fn school_years(&self) -> Arc<dyn SchoolYearService> {
        Arc::clone(&self.school_years)
    }

    #[must_use]
    pub fn sections(&self) -> Arc<dyn SectionService> {
        Arc::clone(&self.sections)
    }

    /// Runs every health check and returns the worst status.
    ///
    /// An unreachable cache only degrades the service, since reads fall
    /// through to the repositories.
    pub async fn health(&self) -> HealthStatus {
        let mut overall = HealthStatus::Healthy;
        for check in &self.health_checks {
            match check.check().await {
                HealthStatus::Healthy => {}
                HealthStatus::Degraded(reason) | HealthStatus::Unhealthy(reason) => {
                    warn!(check = check.name(), %reason, "Health check not passing");
                    overall = HealthStatus::Degraded(format!("{}: {}", check.name(), reason));
                }
            }
        }
        overall
    }
}
