use crate::di::DependenciesInject;
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::subscription::repository::{
        command::DynSubscriptionCommandRepository, query::DynSubscriptionQueryRepository,
    },
    config::ConnectionPool,
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Result<Self> {
        let (metrics, registry) = Self::metrics();
        let di_container = DependenciesInject::new(pool, metrics);

        Ok(Self {
            di_container,
            registry,
        })
    }

    pub fn with_repositories(
        query_repo: DynSubscriptionQueryRepository,
        command_repo: DynSubscriptionCommandRepository,
    ) -> Self {
        let (metrics, registry) = Self::metrics();
        let di_container = DependenciesInject::from_repositories(query_repo, command_repo, metrics);

        Self {
            di_container,
            registry,
        }
    }

    fn metrics() -> (Metrics, Arc<Registry>) {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        (metrics, Arc::new(registry))
    }
}
