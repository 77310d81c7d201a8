use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date format")]
    InvalidFormat,

    #[error("invalid month")]
    InvalidMonth,

    #[error("invalid year")]
    InvalidYear,
}
