use crate::{domain::requests::NewSubscription, errors::RepositoryError, model::SubscriptionModel};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionCommandRepository =
    Arc<dyn SubscriptionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionCommandRepositoryTrait {
    async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<SubscriptionModel, RepositoryError>;
    async fn update(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
