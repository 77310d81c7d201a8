use crate::{
    domain::requests::SubscriptionFilter, errors::RepositoryError, model::SubscriptionModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionQueryRepository = Arc<dyn SubscriptionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionQueryRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError>;
    async fn find_all(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionModel>, RepositoryError>;
}
