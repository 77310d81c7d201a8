use crate::{
    abstract_trait::subscription::{
        repository::query::DynSubscriptionQueryRepository,
        service::cost::SubscriptionCostServiceTrait,
    },
    billing::compute_total,
    domain::{requests::TotalCostRequest, responses::TotalCostResponse},
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info};

pub struct SubscriptionCostService {
    query: DynSubscriptionQueryRepository,
    metrics: Metrics,
}

impl SubscriptionCostService {
    pub fn new(query: DynSubscriptionQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    async fn total_cost_inner(
        &self,
        req: &TotalCostRequest,
    ) -> Result<TotalCostResponse, ServiceError> {
        let window = req.window().map_err(|e| {
            error!(
                "📅 Invalid month range: start_month={} end_month={}",
                req.start_month, req.end_month
            );
            ServiceError::from(e)
        })?;

        let filter = req.filter();

        info!(
            "💰 Computing total cost | window: {}..{}, user_id: {:?}, service_name: {:?}",
            window.start, window.end, filter.user_id, filter.service_name
        );

        let subscriptions = self.query.find_all(&filter).await.map_err(|e| {
            error!("💥 Failed to query subscriptions for total cost: {e:?}");
            ServiceError::from(e)
        })?;

        let total_cost = compute_total(&subscriptions, &window);

        info!(
            "✅ Total cost {total_cost} across {} subscriptions",
            subscriptions.len()
        );

        Ok(TotalCostResponse { total_cost })
    }
}

#[async_trait]
impl SubscriptionCostServiceTrait for SubscriptionCostService {
    async fn total_cost(
        &self,
        req: &TotalCostRequest,
    ) -> Result<TotalCostResponse, ServiceError> {
        let started = Instant::now();
        let result = self.total_cost_inner(req).await;

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics.record(
            "total_cost",
            Method::Post,
            status,
            started.elapsed().as_secs_f64(),
        );

        result
    }
}
