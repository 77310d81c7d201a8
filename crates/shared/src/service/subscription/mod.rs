mod command;
mod cost;
mod query;

pub use self::command::SubscriptionCommandService;
pub use self::cost::SubscriptionCostService;
pub use self::query::SubscriptionQueryService;
