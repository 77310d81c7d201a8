use crate::billing::MonthYear;
use chrono::NaiveDateTime;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

/// A stored subscription. The end month is a single optional value even
/// though the table keeps it in two nullable columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub price: i64,
    pub start_date: MonthYear,
    pub end_date: Option<MonthYear>,
    pub created_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, PgRow> for SubscriptionModel {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let start_date = month_year(row.try_get("start_month")?, row.try_get("start_year")?)?;

        let end_date = end_date(row.try_get("end_month")?, row.try_get("end_year")?)?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            service_name: row.try_get("service_name")?,
            price: row.try_get("price")?,
            start_date,
            end_date,
            created_at: row.try_get("created_at")?,
        })
    }
}

fn month_year(month: i32, year: i64) -> Result<MonthYear, sqlx::Error> {
    MonthYear::new(month, year).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Folds the two nullable end columns into one value. Both set or both null.
fn end_date(month: Option<i32>, year: Option<i64>) -> Result<Option<MonthYear>, sqlx::Error> {
    match (month, year) {
        (Some(month), Some(year)) => month_year(month, year).map(Some),
        (None, None) => Ok(None),
        _ => Err(sqlx::Error::ColumnDecode {
            index: "end_month".into(),
            source: "end_month and end_year must be set together".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_date_requires_both_columns() {
        assert_eq!(
            end_date(Some(6), Some(2025)).unwrap(),
            Some(MonthYear::new(6, 2025).unwrap())
        );
        assert_eq!(end_date(None, None).unwrap(), None);

        assert!(matches!(
            end_date(Some(6), None),
            Err(sqlx::Error::ColumnDecode { .. })
        ));
        assert!(matches!(
            end_date(None, Some(2025)),
            Err(sqlx::Error::ColumnDecode { .. })
        ));
    }

    #[test]
    fn out_of_range_month_fails_to_decode() {
        assert!(matches!(end_date(Some(13), Some(2025)), Err(sqlx::Error::Decode(_))));
        assert!(matches!(month_year(0, 2025), Err(sqlx::Error::Decode(_))));
        assert!(month_year(12, 3_000_000_000).is_ok());
    }
}
