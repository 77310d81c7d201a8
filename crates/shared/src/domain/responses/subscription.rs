use crate::model::SubscriptionModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub price: i64,
    #[schema(example = "07-2025")]
    pub start_date: String,
    #[schema(example = "12-2025")]
    pub end_date: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct TotalCostResponse {
    pub total_cost: i64,
}

// model to response
impl From<SubscriptionModel> for SubscriptionResponse {
    fn from(value: SubscriptionModel) -> Self {
        SubscriptionResponse {
            id: value.id,
            user_id: value.user_id,
            service_name: value.service_name,
            price: value.price,
            start_date: value.start_date.to_string(),
            end_date: value.end_date.map(|d| d.to_string()),
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
