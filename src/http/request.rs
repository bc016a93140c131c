//! Query-string helpers for controller handlers.
//!
//! # Responsibilities
//! - Defaulted typed reads over a parsed query map
//! - Paging extraction (`pageNo`/`pageRow`) with a row cap
//! - Date-range extraction (`sDate`/`eDate`, unix seconds) with an
//!   interval cap
//!
//! The helpers operate on the map produced by axum's
//! `Query<HashMap<String, String>>` extractor; malformed values fall
//! back to the caller's default instead of erroring, while exceeded
//! caps are reported for the handler to map to a client-error envelope.

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};
use thiserror::Error;

const DAY_SECONDS: i64 = 86_400;

/// Caps exceeded while reading paging or date-range parameters.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("requested date interval exceeds {max_days} days")]
    IntervalTooLarge { max_days: i64 },

    #[error("requested page size {requested} exceeds {max_rows} rows")]
    PageTooLarge { requested: i64, max_rows: i64 },
}

/// Paging parameters with their defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_no: i64,
    pub page_row: i64,
}

/// Read an integer parameter, falling back on absence or parse failure.
pub fn query_int(params: &HashMap<String, String>, key: &str, default: i64) -> i64 {
    params
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Read a boolean parameter written as `TRUE`/`FALSE` (any case).
pub fn query_bool(params: &HashMap<String, String>, key: &str, default: bool) -> bool {
    match params.get(key).map(|value| value.to_uppercase()) {
        Some(value) if value == "TRUE" => true,
        Some(value) if value == "FALSE" => false,
        _ => default,
    }
}

/// Read a unix-seconds parameter as a local timestamp.
pub fn query_date(
    params: &HashMap<String, String>,
    key: &str,
    default: DateTime<Local>,
) -> DateTime<Local> {
    params
        .get(key)
        .and_then(|value| value.parse::<i64>().ok())
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .unwrap_or(default)
}

/// Read `pageNo`/`pageRow` (defaults 1/50), capped at `max_rows`.
pub fn page_info(params: &HashMap<String, String>, max_rows: i64) -> Result<PageInfo, QueryError> {
    let page_no = query_int(params, "pageNo", 1);
    let page_row = query_int(params, "pageRow", 50);

    if page_row > max_rows {
        return Err(QueryError::PageTooLarge {
            requested: page_row,
            max_rows,
        });
    }

    Ok(PageInfo { page_no, page_row })
}

/// Read `sDate`/`eDate` (unix seconds), defaulting to the current day's
/// boundaries, with the interval capped at `max_interval_days` days.
pub fn date_range(
    params: &HashMap<String, String>,
    max_interval_days: i64,
) -> Result<(i64, i64), QueryError> {
    let (day_start, day_end) = today_bounds();

    let start = params
        .get("sDate")
        .and_then(|value| value.parse().ok())
        .unwrap_or(day_start);
    let end = params
        .get("eDate")
        .and_then(|value| value.parse().ok())
        .unwrap_or(day_end);

    if end - start > DAY_SECONDS * max_interval_days {
        return Err(QueryError::IntervalTooLarge {
            max_days: max_interval_days,
        });
    }

    Ok((start, end))
}

/// First and last second of the current local day.
fn today_bounds() -> (i64, i64) {
    let now = Local::now();
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|midnight| midnight.timestamp())
        .unwrap_or_else(|| now.timestamp() - now.timestamp().rem_euclid(DAY_SECONDS));
    (start, start + DAY_SECONDS - 1)
}
