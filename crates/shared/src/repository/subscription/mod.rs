mod command;
mod memory;
mod query;

pub use self::command::SubscriptionCommandRepository;
pub use self::memory::InMemorySubscriptionRepository;
pub use self::query::SubscriptionQueryRepository;

const SUBSCRIPTION_COLUMNS: &str = "id, user_id, service_name, price, start_month, start_year, \
                                    end_month, end_year, created_at";
