use crate::{
    billing::{MonthYear, QueryWindow},
    errors::DateError,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSubscriptionRequest {
    #[validate(length(min = 1, message = "service_name is required"))]
    pub service_name: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,

    pub user_id: Uuid,

    #[schema(example = "07-2025")]
    pub start_date: String,

    #[schema(example = "12-2025")]
    pub end_date: Option<String>,
}

impl CreateSubscriptionRequest {
    pub fn parse(&self) -> Result<NewSubscription, DateError> {
        Ok(NewSubscription {
            user_id: self.user_id,
            service_name: self.service_name.clone(),
            price: self.price,
            start_date: MonthYear::parse(&self.start_date)?,
            end_date: self.end_date.as_deref().map(MonthYear::parse).transpose()?,
        })
    }
}

/// Partial update. An empty `end_date` clears the end month and makes the
/// subscription open-ended again.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 1, message = "service_name must not be empty"))]
    pub service_name: Option<String>,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,

    #[schema(example = "07-2025")]
    pub start_date: Option<String>,

    #[schema(example = "12-2025")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllSubscriptions {
    /// Ignored when it is not a valid UUID.
    pub user_id: Option<String>,

    /// Substring match on the service name.
    pub service_name: Option<String>,
}

impl FindAllSubscriptions {
    pub fn filter(&self) -> SubscriptionFilter {
        SubscriptionFilter {
            user_id: self
                .user_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .and_then(|id| Uuid::parse_str(id).ok()),
            service_name: self
                .service_name
                .clone()
                .filter(|name| !name.is_empty())
                .map(ServiceNameMatch::Contains),
        }
    }
}

/// Carries no field rules; months are checked by [`TotalCostRequest::window`]
/// so a bad month reports the date error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TotalCostRequest {
    #[schema(example = 1)]
    pub start_month: i32,

    #[schema(example = 2025)]
    pub start_year: i64,

    #[schema(example = 12)]
    pub end_month: i32,

    #[schema(example = 2025)]
    pub end_year: i64,

    pub user_id: Option<Uuid>,

    /// Exact match on the service name.
    pub service_name: Option<String>,
}

impl TotalCostRequest {
    pub fn window(&self) -> Result<QueryWindow, DateError> {
        QueryWindow::new(
            self.start_month,
            self.start_year,
            self.end_month,
            self.end_year,
        )
    }

    pub fn filter(&self) -> SubscriptionFilter {
        SubscriptionFilter {
            user_id: self.user_id,
            service_name: self.service_name.clone().map(ServiceNameMatch::Exact),
        }
    }
}

/// A validated subscription ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub user_id: Uuid,
    pub service_name: String,
    pub price: i64,
    pub start_date: MonthYear,
    pub end_date: Option<MonthYear>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceNameMatch {
    Exact(String),
    Contains(String),
}

impl ServiceNameMatch {
    pub fn matches(&self, service_name: &str) -> bool {
        match self {
            ServiceNameMatch::Exact(name) => service_name == name,
            ServiceNameMatch::Contains(fragment) => service_name.contains(fragment.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub user_id: Option<Uuid>,
    pub service_name: Option<ServiceNameMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_both_dates() {
        let req = CreateSubscriptionRequest {
            service_name: "Netflix".into(),
            price: 400,
            user_id: Uuid::nil(),
            start_date: "07-2025".into(),
            end_date: Some("12-2025".into()),
        };

        let parsed = req.parse().unwrap();
        assert_eq!(parsed.start_date, MonthYear::new(7, 2025).unwrap());
        assert_eq!(parsed.end_date, Some(MonthYear::new(12, 2025).unwrap()));
    }

    #[test]
    fn create_request_reports_bad_end_date() {
        let req = CreateSubscriptionRequest {
            service_name: "Netflix".into(),
            price: 400,
            user_id: Uuid::nil(),
            start_date: "07-2025".into(),
            end_date: Some("2025".into()),
        };

        assert_eq!(req.parse(), Err(DateError::InvalidFormat));
    }

    #[test]
    fn listing_filter_uses_substring_match_and_drops_bad_ids() {
        let query = FindAllSubscriptions {
            user_id: Some("not-a-uuid".into()),
            service_name: Some("flix".into()),
        };

        let filter = query.filter();
        assert_eq!(filter.user_id, None);
        assert_eq!(
            filter.service_name,
            Some(ServiceNameMatch::Contains("flix".into()))
        );
    }

    #[test]
    fn total_cost_filter_uses_exact_match() {
        let user_id = Uuid::new_v4();
        let req = TotalCostRequest {
            start_month: 1,
            start_year: 2023,
            end_month: 12,
            end_year: 2023,
            user_id: Some(user_id),
            service_name: Some("Netflix".into()),
        };

        let filter = req.filter();
        assert_eq!(filter.user_id, Some(user_id));
        assert_eq!(
            filter.service_name,
            Some(ServiceNameMatch::Exact("Netflix".into()))
        );
    }

    #[test]
    fn service_name_matching_modes_differ() {
        let exact = ServiceNameMatch::Exact("Netflix".into());
        let contains = ServiceNameMatch::Contains("flix".into());

        assert!(exact.matches("Netflix"));
        assert!(!exact.matches("Netflix Premium"));
        assert!(contains.matches("Netflix Premium"));
        assert!(!contains.matches("Spotify"));
    }

    #[test]
    fn total_cost_window_validates_months() {
        let req = TotalCostRequest {
            start_month: 13,
            start_year: 2023,
            end_month: 12,
            end_year: 2023,
            user_id: None,
            service_name: None,
        };

        assert_eq!(req.window(), Err(DateError::InvalidMonth));
    }
}
