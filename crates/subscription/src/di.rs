use shared::{
    abstract_trait::subscription::{
        repository::{
            command::DynSubscriptionCommandRepository, query::DynSubscriptionQueryRepository,
        },
        service::{
            command::DynSubscriptionCommandService, cost::DynSubscriptionCostService,
            query::DynSubscriptionQueryService,
        },
    },
    config::ConnectionPool,
    repository::subscription::{SubscriptionCommandRepository, SubscriptionQueryRepository},
    service::subscription::{
        SubscriptionCommandService, SubscriptionCostService, SubscriptionQueryService,
    },
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub subscription_query: DynSubscriptionQueryService,
    pub subscription_command: DynSubscriptionCommandService,
    pub subscription_cost: DynSubscriptionCostService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("subscription_query", &"SubscriptionQueryService")
            .field("subscription_command", &"SubscriptionCommandService")
            .field("subscription_cost", &"SubscriptionCostService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, metrics: Metrics) -> Self {
        let query_repo =
            Arc::new(SubscriptionQueryRepository::new(db.clone())) as DynSubscriptionQueryRepository;
        let command_repo = Arc::new(SubscriptionCommandRepository::new(db))
            as DynSubscriptionCommandRepository;

        Self::from_repositories(query_repo, command_repo, metrics)
    }

    pub fn from_repositories(
        query_repo: DynSubscriptionQueryRepository,
        command_repo: DynSubscriptionCommandRepository,
        metrics: Metrics,
    ) -> Self {
        let subscription_query =
            Arc::new(SubscriptionQueryService::new(query_repo.clone(), metrics.clone()))
                as DynSubscriptionQueryService;
        let subscription_command = Arc::new(SubscriptionCommandService::new(
            query_repo.clone(),
            command_repo,
            metrics.clone(),
        )) as DynSubscriptionCommandService;
        let subscription_cost = Arc::new(SubscriptionCostService::new(query_repo, metrics))
            as DynSubscriptionCostService;

        Self {
            subscription_query,
            subscription_command,
            subscription_cost,
        }
    }
}
