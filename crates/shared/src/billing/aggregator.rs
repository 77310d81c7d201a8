use super::{MonthYear, earlier_of, later_of, months_between};
use crate::{errors::DateError, model::SubscriptionModel};

/// The month range a total is computed over. Bounds are not required to be
/// ordered; a reversed window simply intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: MonthYear,
    pub end: MonthYear,
}

impl QueryWindow {
    pub fn new(
        start_month: i32,
        start_year: i64,
        end_month: i32,
        end_year: i64,
    ) -> Result<Self, DateError> {
        Ok(Self {
            start: MonthYear::new(start_month, start_year)?,
            end: MonthYear::new(end_month, end_year)?,
        })
    }

    pub fn months(&self) -> i64 {
        months_between(&self.start, &self.end).max(0)
    }
}

/// Amount billed for one subscription inside `window`.
///
/// Open-ended subscriptions are capped at the window end. Every month the
/// overlap touches is billed in full.
pub fn contribution(subscription: &SubscriptionModel, window: &QueryWindow) -> i64 {
    let effective_end = subscription.end_date.as_ref().unwrap_or(&window.end);

    let overlap_start = later_of(&subscription.start_date, &window.start);
    let overlap_end = earlier_of(effective_end, &window.end);

    if overlap_start > overlap_end {
        return 0;
    }

    months_between(overlap_start, overlap_end).saturating_mul(subscription.price)
}

/// Sum of every subscription's contribution to `window`.
pub fn compute_total(subscriptions: &[SubscriptionModel], window: &QueryWindow) -> i64 {
    subscriptions
        .iter()
        .map(|subscription| contribution(subscription, window))
        .fold(0i64, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn my(month: i32, year: i64) -> MonthYear {
        MonthYear::new(month, year).unwrap()
    }

    fn sub(start: MonthYear, end: Option<MonthYear>, price: i64) -> SubscriptionModel {
        SubscriptionModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            service_name: "Yandex Plus".into(),
            price,
            start_date: start,
            end_date: end,
            created_at: None,
        }
    }

    fn year_2023() -> QueryWindow {
        QueryWindow::new(1, 2023, 12, 2023).unwrap()
    }

    #[test]
    fn window_rejects_invalid_months() {
        assert_eq!(QueryWindow::new(0, 2023, 12, 2023), Err(DateError::InvalidMonth));
        assert_eq!(QueryWindow::new(1, 2023, 13, 2023), Err(DateError::InvalidMonth));
    }

    #[test]
    fn window_accepts_reversed_bounds() {
        let window = QueryWindow::new(12, 2023, 1, 2023).unwrap();
        assert_eq!(window.months(), 0);
    }

    #[test]
    fn bounded_subscription_inside_window() {
        let s = sub(my(1, 2023), Some(my(6, 2023)), 100);
        assert_eq!(contribution(&s, &year_2023()), 600);
    }

    #[test]
    fn open_ended_subscription_is_capped_at_window_end() {
        let s = sub(my(3, 2023), None, 50);
        assert_eq!(contribution(&s, &year_2023()), 500);
    }

    #[test]
    fn subscription_after_window_contributes_nothing() {
        let s = sub(my(1, 2024), None, 999);
        assert_eq!(contribution(&s, &year_2023()), 0);
    }

    #[test]
    fn subscription_before_window_contributes_nothing() {
        let s = sub(my(1, 2021), Some(my(12, 2022)), 300);
        assert_eq!(contribution(&s, &year_2023()), 0);
    }

    #[test]
    fn combined_scenarios_sum() {
        let subs = vec![
            sub(my(1, 2023), Some(my(6, 2023)), 100),
            sub(my(3, 2023), None, 50),
            sub(my(1, 2024), None, 999),
        ];

        assert_eq!(compute_total(&subs, &year_2023()), 1100);
    }

    #[test]
    fn order_does_not_matter() {
        let mut subs = vec![
            sub(my(1, 2023), Some(my(6, 2023)), 100),
            sub(my(3, 2023), None, 50),
            sub(my(11, 2022), Some(my(2, 2023)), 7),
        ];
        let forward = compute_total(&subs, &year_2023());
        subs.reverse();

        assert_eq!(compute_total(&subs, &year_2023()), forward);
        assert_eq!(forward, 600 + 500 + 2 * 7);
    }

    #[test]
    fn empty_input_totals_zero() {
        assert_eq!(compute_total(&[], &year_2023()), 0);
    }

    #[test]
    fn subscription_spanning_window_is_clipped_on_both_sides() {
        let s = sub(my(6, 2020), Some(my(6, 2030)), 10);
        assert_eq!(contribution(&s, &year_2023()), 120);
    }

    #[test]
    fn single_shared_boundary_month_is_billed() {
        let window = year_2023();

        let ends_at_start = sub(my(1, 2022), Some(my(1, 2023)), 40);
        assert_eq!(contribution(&ends_at_start, &window), 40);

        let starts_at_end = sub(my(12, 2023), None, 40);
        assert_eq!(contribution(&starts_at_end, &window), 40);
    }

    #[test]
    fn reversed_subscription_contributes_nothing() {
        let s = sub(my(9, 2023), Some(my(4, 2023)), 100);
        assert_eq!(contribution(&s, &year_2023()), 0);
    }

    #[test]
    fn reversed_window_totals_zero() {
        let window = QueryWindow::new(12, 2023, 1, 2023).unwrap();
        let subs = vec![
            sub(my(1, 2023), Some(my(6, 2023)), 100),
            sub(my(3, 2023), None, 50),
            sub(my(1, 2000), None, 1),
        ];

        assert_eq!(compute_total(&subs, &window), 0);
    }

    #[test]
    fn open_ended_contribution_never_exceeds_window_span() {
        let window = year_2023();
        for start in [my(1, 1990), my(1, 2023), my(7, 2023), my(12, 2023)] {
            let s = sub(start, None, 1);
            assert!(contribution(&s, &window) <= window.months());
        }
    }

    #[test]
    fn zero_price_contributes_nothing() {
        let s = sub(my(1, 2023), None, 0);
        assert_eq!(contribution(&s, &year_2023()), 0);
    }
}
