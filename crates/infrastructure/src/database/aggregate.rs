//! Raw SQL aggregates shared by the reporting queries.
//!
//! Months are bucketed in UTC and every window filter is inclusive on both
//! ends (`BETWEEN start AND end`).

use std::str::FromStr;

use domain::{InvalidLiteral, StorageError, YearWindow};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement, Value};

use super::with_storage_errors;

/// `EXTRACT` expression yielding the UTC month number of `datetime`
pub(crate) const MONTH_BUCKET: &str = "EXTRACT(MONTH FROM datetime AT TIME ZONE 'UTC')::int";

#[derive(Debug, FromQueryResult)]
pub(crate) struct MonthValue {
    pub month: i32,
    pub value: f64,
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct MonthOnly {
    pub month: i32,
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct CategoryValue {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct CategoryCount {
    pub category: String,
    pub value: i64,
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct Scalar {
    pub value: Option<f64>,
}

pub(crate) fn statement(sql: &str, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

/// Window bounds as the first two bind parameters
pub(crate) fn window_values(window: &YearWindow) -> Vec<Value> {
    vec![window.start.into(), window.end.into()]
}

pub(crate) async fn fetch_all<T: FromQueryResult>(
    db: &DatabaseConnection,
    operation: &str,
    stmt: Statement,
) -> Result<Vec<T>, StorageError> {
    tracing::debug!("{}: {}", operation, stmt.sql);
    with_storage_errors(operation, T::find_by_statement(stmt).all(db)).await
}

pub(crate) async fn fetch_one<T: FromQueryResult>(
    db: &DatabaseConnection,
    operation: &str,
    stmt: Statement,
) -> Result<Option<T>, StorageError> {
    tracing::debug!("{}: {}", operation, stmt.sql);
    with_storage_errors(operation, T::find_by_statement(stmt).one(db)).await
}

/// Month buckets as `(month, value)`, dropping anything outside 1-12
pub(crate) fn month_pairs(rows: Vec<MonthValue>) -> Vec<(u32, f64)> {
    rows.into_iter()
        .filter_map(|row| {
            u32::try_from(row.month)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .map(|m| (m, row.value))
        })
        .collect()
}

/// Parse the textual enum labels read back from Postgres
pub(crate) fn parse_categories<K, V>(rows: Vec<(String, V)>) -> Result<Vec<(K, V)>, StorageError>
where
    K: FromStr<Err = InvalidLiteral>,
{
    rows.into_iter()
        .map(|(category, value)| -> Result<(K, V), StorageError> {
            Ok((category.parse::<K>()?, value))
        })
        .collect()
}
