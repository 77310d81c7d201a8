mod api;
mod subscription;

pub use self::api::ApiResponse;
pub use self::subscription::{SubscriptionResponse, TotalCostResponse};
