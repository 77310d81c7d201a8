mod subscription;

pub use self::subscription::SubscriptionModel;
