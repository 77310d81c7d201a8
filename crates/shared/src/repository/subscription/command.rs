use super::SUBSCRIPTION_COLUMNS;
use crate::{
    abstract_trait::subscription::repository::command::SubscriptionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::NewSubscription, errors::RepositoryError,
    model::SubscriptionModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct SubscriptionCommandRepository {
    db: ConnectionPool,
}

impl SubscriptionCommandRepository {
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
impl SubscriptionCommandRepositoryTrait for SubscriptionCommandRepository {
    async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<SubscriptionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            INSERT INTO subscriptions
                (user_id, service_name, price, start_month, start_year, end_month, end_year, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp)
            RETURNING {SUBSCRIPTION_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(subscription.user_id)
            .bind(&subscription.service_name)
            .bind(subscription.price)
            .bind(subscription.start_date.month())
            .bind(subscription.start_date.year())
            .bind(subscription.end_date.map(|d| d.month()))
            .bind(subscription.end_date.map(|d| d.year()))
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create subscription '{}' for user {}: {err:?}",
                    subscription.service_name, subscription.user_id
                );
                RepositoryError::from(err)
            })?;

        Ok(result)
    }

    async fn update(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            UPDATE subscriptions
            SET service_name = $2,
                price = $3,
                start_month = $4,
                start_year = $5,
                end_month = $6,
                end_year = $7
            WHERE id = $1
            RETURNING {SUBSCRIPTION_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(subscription.id)
            .bind(&subscription.service_name)
            .bind(subscription.price)
            .bind(subscription.start_date.month())
            .bind(subscription.start_date.year())
            .bind(subscription.end_date.map(|d| d.month()))
            .bind(subscription.end_date.map(|d| d.year()))
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update subscription ID {}: {err:?}", subscription.id);
                RepositoryError::from(err)
            })?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete subscription ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
