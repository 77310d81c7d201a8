//! Month-granular billing: the `MonthYear` ordinal, interval primitives and
//! the total-cost aggregator. Everything here is pure and synchronous.

mod aggregator;
mod interval;
mod month_year;

pub use self::aggregator::{QueryWindow, compute_total, contribution};
pub use self::interval::{earlier_of, later_of, months_between};
pub use self::month_year::MonthYear;
