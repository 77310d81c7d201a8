use crate::{
    domain::{requests::TotalCostRequest, responses::TotalCostResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSubscriptionCostService = Arc<dyn SubscriptionCostServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionCostServiceTrait {
    async fn total_cost(
        &self,
        request: &TotalCostRequest,
    ) -> Result<TotalCostResponse, ServiceError>;
}
