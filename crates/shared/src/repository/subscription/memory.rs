use crate::{
    abstract_trait::subscription::repository::{
        command::SubscriptionCommandRepositoryTrait, query::SubscriptionQueryRepositoryTrait,
    },
    domain::requests::{NewSubscription, SubscriptionFilter},
    errors::RepositoryError,
    model::SubscriptionModel,
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store with the same filter semantics as the Postgres
/// repositories. Backs the service and HTTP tests.
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    rows: RwLock<Vec<SubscriptionModel>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<SubscriptionModel>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn matches(row: &SubscriptionModel, filter: &SubscriptionFilter) -> bool {
    filter.user_id.is_none_or(|id| row.user_id == id)
        && filter
            .service_name
            .as_ref()
            .is_none_or(|name| name.matches(&row.service_name))
}

#[async_trait]
impl SubscriptionCommandRepositoryTrait for InMemorySubscriptionRepository {
    async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<SubscriptionModel, RepositoryError> {
        let model = SubscriptionModel {
            id: Uuid::new_v4(),
            user_id: subscription.user_id,
            service_name: subscription.service_name.clone(),
            price: subscription.price,
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            created_at: Some(Utc::now().naive_utc()),
        };

        self.rows.write().await.push(model.clone());
        Ok(model)
    }

    async fn update(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == subscription.id)
            .ok_or(RepositoryError::NotFound)?;

        *row = SubscriptionModel {
            created_at: row.created_at,
            ..subscription.clone()
        };

        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl SubscriptionQueryRepositoryTrait for InMemorySubscriptionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionModel>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| matches(row, filter))
            .cloned()
            .collect())
    }
}
