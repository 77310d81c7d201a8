use crate::{
    domain::{
        requests::{CreateSubscriptionRequest, UpdateSubscriptionRequest},
        responses::{ApiResponse, SubscriptionResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionCommandService = Arc<dyn SubscriptionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        request: &UpdateSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
