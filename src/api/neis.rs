//! NEIS data API: school meals and academic schedules.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::codec::{self, QueryPairs};
use crate::error::{Error, Result};
use crate::models::{Meal, Schedule};
use crate::transport::HttpTransport;

const MEALS_PATH: &str = "/v1/neis/meals";
const SCHEDULES_PATH: &str = "/v1/neis/schedules";

/// Date selection for NEIS queries.
///
/// Use [`DateQuery::on`] for a single day or [`DateQuery::between`] for an
/// inclusive range. The default query asks for today.
///
/// # Example
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use datagsm_openapi::api::DateQuery;
///
/// let day = DateQuery::on(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
/// let week = DateQuery::between(
///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 7).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateQuery {
    date: Option<NaiveDate>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
}

impl DateQuery {
    /// Query today's data.
    pub fn today() -> Self {
        Self::default()
    }

    /// Query a single day.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Query an inclusive date range.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            date: None,
            from_date: Some(from),
            to_date: Some(to),
        }
    }

    /// Validate and encode. A query may select a single day or a range, not
    /// both, and a range needs both bounds in order.
    pub(crate) fn to_query(&self) -> Result<QueryPairs> {
        let mut pairs = QueryPairs::new();
        match (self.date, self.from_date, self.to_date) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(Error::Validation(
                    "set either a single date or a date range, not both".into(),
                ));
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(Error::Validation(
                    "a date range needs both fromDate and toDate".into(),
                ));
            }
            (None, Some(from), Some(to)) => {
                if from > to {
                    return Err(Error::Validation(format!(
                        "fromDate {from} is after toDate {to}"
                    )));
                }
                pairs.push("fromDate", from);
                pairs.push("toDate", to);
            }
            (Some(date), None, None) => pairs.push("date", date),
            (None, None, None) => pairs.push("date", Local::now().date_naive()),
        }
        Ok(pairs)
    }
}

/// NEIS data API.
#[derive(Debug, Clone)]
pub struct NeisApi {
    transport: Arc<HttpTransport>,
}

impl NeisApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Meal information for a day or date range.
    pub async fn get_meals(&self, query: &DateQuery) -> Result<Vec<Meal>> {
        let pairs = query.to_query()?;
        let body = self.transport.get(MEALS_PATH, &pairs).await?;
        codec::decode_envelope(&body)
    }

    /// Academic schedule events for a day or date range.
    pub async fn get_schedules(&self, query: &DateQuery) -> Result<Vec<Schedule>> {
        let pairs = query.to_query()?;
        let body = self.transport.get(SCHEDULES_PATH, &pairs).await?;
        codec::decode_envelope(&body)
    }
}
