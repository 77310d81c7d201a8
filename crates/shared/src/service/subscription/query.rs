use crate::{
    abstract_trait::subscription::{
        repository::query::DynSubscriptionQueryRepository,
        service::query::SubscriptionQueryServiceTrait,
    },
    domain::{
        requests::FindAllSubscriptions,
        responses::{ApiResponse, SubscriptionResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct SubscriptionQueryService {
    query: DynSubscriptionQueryRepository,
    metrics: Metrics,
}

impl SubscriptionQueryService {
    pub fn new(query: DynSubscriptionQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }
}

#[async_trait]
impl SubscriptionQueryServiceTrait for SubscriptionQueryService {
    async fn find_all(
        &self,
        req: &FindAllSubscriptions,
    ) -> Result<ApiResponse<Vec<SubscriptionResponse>>, ServiceError> {
        let started = Instant::now();
        let filter = req.filter();

        if let (Some(raw), None) = (
            req.user_id.as_deref().filter(|id| !id.is_empty()),
            filter.user_id,
        ) {
            warn!("Ignoring malformed user_id filter {raw:?}");
        }

        info!(
            "🔍 Listing subscriptions | user_id: {:?}, service_name: {:?}",
            filter.user_id, filter.service_name
        );

        let result = self.query.find_all(&filter).await;

        let (status, result) = match result {
            Ok(subscriptions) => {
                let data: Vec<SubscriptionResponse> =
                    subscriptions.into_iter().map(Into::into).collect();

                info!("✅ Found {} subscriptions", data.len());

                (
                    Status::Success,
                    Ok(ApiResponse::success("Subscriptions retrieved successfully", data)),
                )
            }
            Err(e) => {
                error!("💥 Failed to list subscriptions: {e:?}");
                (Status::Error, Err(ServiceError::from(e)))
            }
        };

        self.metrics.record(
            "find_all_subscriptions",
            Method::Get,
            status,
            started.elapsed().as_secs_f64(),
        );

        result
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<SubscriptionResponse>, ServiceError> {
        let started = Instant::now();
        info!("🔍 Finding subscription id={id}");

        let result = match self.query.find_by_id(id).await {
            Ok(subscription) => Ok(ApiResponse::success(
                "Subscription retrieved successfully",
                SubscriptionResponse::from(subscription),
            )),
            Err(e) => {
                error!("💥 Subscription id={id} lookup failed: {e:?}");
                Err(ServiceError::from(e))
            }
        };

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics.record(
            "find_subscription_by_id",
            Method::Get,
            status,
            started.elapsed().as_secs_f64(),
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        billing::MonthYear, errors::RepositoryError, model::SubscriptionModel,
        repository::subscription::InMemorySubscriptionRepository,
    };
    use std::sync::Arc;

    fn row(user_id: Uuid, service_name: &str) -> SubscriptionModel {
        SubscriptionModel {
            id: Uuid::new_v4(),
            user_id,
            service_name: service_name.into(),
            price: 100,
            start_date: MonthYear::new(1, 2025).unwrap(),
            end_date: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn listing_filters_by_user_and_substring() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let repo = Arc::new(InMemorySubscriptionRepository::with_rows(vec![
            row(alice, "Netflix"),
            row(alice, "Netflix Premium"),
            row(alice, "Spotify"),
            row(bob, "Netflix"),
        ]));
        let service = SubscriptionQueryService::new(repo, Metrics::new());

        let req = FindAllSubscriptions {
            user_id: Some(alice.to_string()),
            service_name: Some("flix".into()),
        };
        let response = service.find_all(&req).await.unwrap();

        assert_eq!(response.data.len(), 2);
        assert!(response.data.iter().all(|s| s.user_id == alice));
    }

    #[tokio::test]
    async fn listing_ignores_malformed_user_id() {
        let repo = Arc::new(InMemorySubscriptionRepository::with_rows(vec![
            row(Uuid::new_v4(), "Netflix"),
            row(Uuid::new_v4(), "Spotify"),
        ]));
        let service = SubscriptionQueryService::new(repo, Metrics::new());

        let req = FindAllSubscriptions {
            user_id: Some("nope".into()),
            service_name: None,
        };

        assert_eq!(service.find_all(&req).await.unwrap().data.len(), 2);
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_rows() {
        let service = SubscriptionQueryService::new(
            Arc::new(InMemorySubscriptionRepository::new()),
            Metrics::new(),
        );

        let err = service.find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }
}
