mod date;
mod errors;
mod http;
mod repository;
mod service;
mod validate;

pub use self::date::DateError;
pub use self::errors::ErrorResponse;
pub use self::http::AppErrorHttp;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
