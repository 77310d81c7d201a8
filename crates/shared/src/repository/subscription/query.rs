use super::SUBSCRIPTION_COLUMNS;
use crate::{
    abstract_trait::subscription::repository::query::SubscriptionQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{ServiceNameMatch, SubscriptionFilter},
    errors::RepositoryError,
    model::SubscriptionModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionQueryRepository {
    db: ConnectionPool,
}

impl SubscriptionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl SubscriptionQueryRepositoryTrait for SubscriptionQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = $1");

        sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch subscription ID {id}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let (exact, fragment) = match &filter.service_name {
            Some(ServiceNameMatch::Exact(name)) => (Some(name.as_str()), None),
            Some(ServiceNameMatch::Contains(fragment)) => (None, Some(fragment.as_str())),
            None => (None, None),
        };

        let sql = format!(
            r#"
            SELECT {SUBSCRIPTION_COLUMNS}
            FROM subscriptions
            WHERE ($1::UUID IS NULL OR user_id = $1)
              AND ($2::TEXT IS NULL OR service_name = $2)
              AND ($3::TEXT IS NULL OR strpos(service_name, $3) > 0)
            ORDER BY created_at ASC
            "#
        );

        sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(filter.user_id)
            .bind(exact)
            .bind(fragment)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch subscriptions: {e:?}");
                RepositoryError::from(e)
            })
    }
}
