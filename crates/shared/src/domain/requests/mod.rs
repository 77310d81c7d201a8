mod subscription;

pub use self::subscription::{
    CreateSubscriptionRequest, FindAllSubscriptions, NewSubscription, ServiceNameMatch,
    SubscriptionFilter, TotalCostRequest, UpdateSubscriptionRequest,
};
