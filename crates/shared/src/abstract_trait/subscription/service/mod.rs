pub mod command;
pub mod cost;
pub mod query;
