use super::MonthYear;

/// Inclusive count of calendar months from `start` to `end`.
///
/// Only meaningful when `start <= end`; a reversed pair yields zero or a
/// negative number.
pub fn months_between(start: &MonthYear, end: &MonthYear) -> i64 {
    end.ordinal() - start.ordinal() + 1
}

/// The later of two months. Ties return `a`.
pub fn later_of<'a>(a: &'a MonthYear, b: &'a MonthYear) -> &'a MonthYear {
    if a >= b { a } else { b }
}

/// The earlier of two months. Ties return `a`.
pub fn earlier_of<'a>(a: &'a MonthYear, b: &'a MonthYear) -> &'a MonthYear {
    if a <= b { a } else { b }
}
