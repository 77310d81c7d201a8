use crate::errors::DateError;
use std::{fmt, str::FromStr};

const SEPARATOR: char = '-';

/// A calendar month. Ordering compares the year first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    // Field order drives the derived ordering.
    year: i64,
    month: i32,
}

impl MonthYear {
    /// Builds a value, rejecting months outside `1..=12`. Any year is accepted.
    pub fn new(month: i32, year: i64) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth);
        }

        Ok(Self { year, month })
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Months elapsed since January of year zero; used for span arithmetic.
    pub(crate) fn ordinal(&self) -> i64 {
        self.year
            .saturating_mul(12)
            .saturating_add(i64::from(self.month - 1))
    }

    /// Parses a `MONTH-YEAR` token such as `07-2025`.
    pub fn parse(token: &str) -> Result<Self, DateError> {
        let mut parts = token.split(SEPARATOR);

        let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DateError::InvalidFormat);
        };

        let month = month
            .parse::<i32>()
            .map_err(|_| DateError::InvalidMonth)?;
        let year = year.parse::<i64>().map_err(|_| DateError::InvalidYear)?;

        Self::new(month, year)
    }
}

impl FromStr for MonthYear {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{SEPARATOR}{}", self.month, self.year)
    }
}
