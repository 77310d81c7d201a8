use crate::{
    abstract_trait::subscription::{
        repository::{
            command::DynSubscriptionCommandRepository, query::DynSubscriptionQueryRepository,
        },
        service::command::SubscriptionCommandServiceTrait,
    },
    billing::MonthYear,
    domain::{
        requests::{CreateSubscriptionRequest, UpdateSubscriptionRequest},
        responses::{ApiResponse, SubscriptionResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::SubscriptionModel,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct SubscriptionCommandService {
    query: DynSubscriptionQueryRepository,
    command: DynSubscriptionCommandRepository,
    metrics: Metrics,
}

impl SubscriptionCommandService {
    pub fn new(
        query: DynSubscriptionQueryRepository,
        command: DynSubscriptionCommandRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            query,
            command,
            metrics,
        }
    }

    fn finish<T>(
        &self,
        operation: &str,
        method: Method,
        started: Instant,
        result: &Result<T, ServiceError>,
    ) {
        let status = match result {
            Ok(_) => Status::Success,
            Err(_) => Status::Error,
        };
        self.metrics
            .record(operation, method, status, started.elapsed().as_secs_f64());
    }

    async fn create_inner(
        &self,
        req: &CreateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        let new_subscription = req.parse().map_err(|e| {
            error!("📅 Invalid date in create request: {e}");
            ServiceError::from(e)
        })?;

        info!(
            "🆕 Creating subscription '{}' for user {}",
            req.service_name, req.user_id
        );

        let subscription = self.command.create(&new_subscription).await.map_err(|e| {
            error!(
                "💥 Failed to create subscription '{}': {e:?}",
                req.service_name
            );
            ServiceError::from(e)
        })?;

        let response = SubscriptionResponse::from(subscription);

        info!("✅ Subscription created successfully with id={}", response.id);

        Ok(ApiResponse::success(
            "✅ Subscription created successfully!",
            response,
        ))
    }

    async fn update_inner(
        &self,
        id: Uuid,
        req: &UpdateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("🔄 Updating subscription id={id}");

        let existing = self.query.find_by_id(id).await.map_err(|e| {
            error!("💥 Subscription id={id} not available for update: {e:?}");
            ServiceError::from(e)
        })?;

        let updated = apply_update(existing, req)?;

        let subscription = self.command.update(&updated).await.map_err(|e| {
            error!("💥 Failed to update subscription id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        let response = SubscriptionResponse::from(subscription);

        info!("✅ Subscription updated successfully with id={}", response.id);

        Ok(ApiResponse::success(
            "✅ Subscription updated successfully!",
            response,
        ))
    }
}

/// Merges a partial update into a stored subscription. An empty `end_date`
/// clears the end month.
fn apply_update(
    mut subscription: SubscriptionModel,
    req: &UpdateSubscriptionRequest,
) -> Result<SubscriptionModel, ServiceError> {
    if let Some(service_name) = &req.service_name {
        subscription.service_name = service_name.clone();
    }

    if let Some(price) = req.price {
        subscription.price = price;
    }

    if let Some(start_date) = &req.start_date {
        subscription.start_date = MonthYear::parse(start_date)?;
    }

    if let Some(end_date) = &req.end_date {
        subscription.end_date = if end_date.is_empty() {
            None
        } else {
            Some(MonthYear::parse(end_date)?)
        };
    }

    Ok(subscription)
}

#[async_trait]
impl SubscriptionCommandServiceTrait for SubscriptionCommandService {
    async fn create(
        &self,
        req: &CreateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.create_inner(req).await;
        self.finish("create_subscription", Method::Post, started, &result);
        result
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.update_inner(id, req).await;
        self.finish("update_subscription", Method::Put, started, &result);
        result
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let started = Instant::now();
        info!("🗑️ Deleting subscription id={id}");

        let result = match self.command.delete(id).await {
            Ok(()) => {
                info!("✅ Subscription id={id} deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                error!("🔍 Subscription id={id} not found for delete");
                Err(ServiceError::NotFound(format!("Subscription {id} not found")))
            }
            Err(e) => {
                error!("💥 Failed to delete subscription id={id}: {e:?}");
                Err(ServiceError::from(e))
            }
        };

        self.finish("delete_subscription", Method::Delete, started, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::subscription::repository::query::SubscriptionQueryRepositoryTrait,
        errors::DateError, repository::subscription::InMemorySubscriptionRepository,
    };
    use std::sync::Arc;

    fn service() -> (SubscriptionCommandService, Arc<InMemorySubscriptionRepository>) {
        let repo = Arc::new(InMemorySubscriptionRepository::new());
        let service = SubscriptionCommandService::new(repo.clone(), repo.clone(), Metrics::new());
        (service, repo)
    }

    fn create_request() -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            service_name: "Yandex Plus".into(),
            price: 400,
            user_id: Uuid::new_v4(),
            start_date: "07-2025".into(),
            end_date: None,
        }
    }

    #[tokio::test]
    async fn create_stores_parsed_dates() {
        let (service, repo) = service();

        let response = service.create(&create_request()).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.start_date, "07-2025");
        assert_eq!(response.data.end_date, None);

        let stored = repo.find_by_id(response.data.id).await.unwrap();
        assert_eq!(stored.start_date, MonthYear::new(7, 2025).unwrap());
    }

    #[tokio::test]
    async fn create_rejects_bad_start_date() {
        let (service, repo) = service();
        let req = CreateSubscriptionRequest {
            start_date: "13-2025".into(),
            ..create_request()
        };

        let err = service.create(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Date(DateError::InvalidMonth)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_empty_service_name() {
        let (service, _) = service();
        let req = CreateSubscriptionRequest {
            service_name: String::new(),
            ..create_request()
        };

        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (service, _) = service();
        let created = service.create(&create_request()).await.unwrap().data;

        let req = UpdateSubscriptionRequest {
            price: Some(599),
            end_date: Some("12-2025".into()),
            ..Default::default()
        };
        let updated = service.update(created.id, &req).await.unwrap().data;

        assert_eq!(updated.price, 599);
        assert_eq!(updated.service_name, created.service_name);
        assert_eq!(updated.start_date, "07-2025");
        assert_eq!(updated.end_date.as_deref(), Some("12-2025"));
    }

    #[tokio::test]
    async fn update_with_empty_end_date_reopens_subscription() {
        let (service, _) = service();
        let req = CreateSubscriptionRequest {
            end_date: Some("12-2025".into()),
            ..create_request()
        };
        let created = service.create(&req).await.unwrap().data;

        let req = UpdateSubscriptionRequest {
            end_date: Some(String::new()),
            ..Default::default()
        };
        let updated = service.update(created.id, &req).await.unwrap().data;

        assert_eq!(updated.end_date, None);
    }

    #[tokio::test]
    async fn update_parses_end_date_strictly() {
        let (service, _) = service();
        let created = service.create(&create_request()).await.unwrap().data;

        let req = UpdateSubscriptionRequest {
            end_date: Some("1-abc".into()),
            ..Default::default()
        };
        let err = service.update(created.id, &req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Date(DateError::InvalidYear)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (service, _) = service();

        let err = service
            .update(Uuid::new_v4(), &UpdateSubscriptionRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_and_then_reports_missing() {
        let (service, repo) = service();
        let created = service.create(&create_request()).await.unwrap().data;

        service.delete(created.id).await.unwrap();
        assert!(repo.is_empty().await);

        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
