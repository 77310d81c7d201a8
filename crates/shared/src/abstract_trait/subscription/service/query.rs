use crate::{
    domain::{
        requests::FindAllSubscriptions,
        responses::{ApiResponse, SubscriptionResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionQueryService = Arc<dyn SubscriptionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionQueryServiceTrait {
    async fn find_all(
        &self,
        request: &FindAllSubscriptions,
    ) -> Result<ApiResponse<Vec<SubscriptionResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<SubscriptionResponse>, ServiceError>;
}
