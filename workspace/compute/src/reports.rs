//! Reporting over stored transactions: monthly income/expense series and the
//! dashboard summary.
//!
//! Nothing here is cached or materialised; every call reads the store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use common::{DashboardSummary, MonthlyData, TransactionDto};
use model::TransactionType;
use model::entities::{category, transaction};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};

/// Length of the trailing window used for the monthly series.
pub const MONTHLY_WINDOW_DAYS: i64 = 180;

/// How many transactions the dashboard lists.
pub const RECENT_TRANSACTIONS: u64 = 5;

/// Computes the derived reporting views.
///
/// The computer is anchored at a fixed instant so that the trailing window is
/// reproducible; the HTTP layer builds a fresh one per request.
#[derive(Debug, Clone, Copy)]
pub struct ReportsComputer {
    now: DateTime<Utc>,
    window: Duration,
}

impl ReportsComputer {
    /// Creates a computer anchored at the current instant.
    pub fn new() -> Self {
        Self::new_with_now(Utc::now())
    }

    /// Creates a computer anchored at `now`.
    pub fn new_with_now(now: DateTime<Utc>) -> Self {
        Self {
            now,
            window: Duration::days(MONTHLY_WINDOW_DAYS),
        }
    }

    /// Start of the monthly window (inclusive).
    pub fn window_start(&self) -> DateTime<Utc> {
        self.now - self.window
    }

    /// Monthly income and expense totals for transactions dated on or after
    /// [`window_start`](Self::window_start), oldest month first.
    #[instrument(skip(self, conn), fields(since = %self.window_start()))]
    pub async fn monthly_data<C>(&self, conn: &C) -> Result<Vec<MonthlyData>>
    where
        C: ConnectionTrait,
    {
        let rows = transaction::Entity::find()
            .filter(transaction::Column::Date.gte(self.window_start()))
            .all(conn)
            .await?;

        debug!("Aggregating {} transactions into months", rows.len());

        aggregate_monthly(rows.into_iter().map(|t| (t.date, t.kind, t.amount)))
    }

    /// Totals, balance, latest transactions and the monthly series.
    ///
    /// All reads share one database transaction so the parts agree with each
    /// other. Nothing is written.
    #[instrument(skip(self, db))]
    pub async fn dashboard_summary(&self, db: &DatabaseConnection) -> Result<DashboardSummary> {
        let txn = db.begin().await?;

        let total_income = sum_of_kind(&txn, TransactionType::Income).await?;
        let total_expenses = sum_of_kind(&txn, TransactionType::Expense).await?;

        let recent_transactions = transaction::Entity::find_newest_with_category()
            .limit(RECENT_TRANSACTIONS)
            .all(&txn)
            .await?
            .into_iter()
            .map(to_transaction_dto)
            .collect::<Result<Vec<_>>>()?;

        let monthly_data = self.monthly_data(&txn).await?;

        txn.commit().await?;

        info!(
            "Dashboard summary: income {}, expenses {}, {} recent, {} months",
            total_income,
            total_expenses,
            recent_transactions.len(),
            monthly_data.len()
        );

        Ok(DashboardSummary::new(
            total_income,
            total_expenses,
            recent_transactions,
            monthly_data,
        ))
    }
}

impl Default for ReportsComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups `(date, type, amount)` rows by calendar month and sums each side.
///
/// Months are keyed on (year, month) so the output is oldest first no matter
/// what order the rows arrive in. A month with only one kind of transaction
/// reports `0.0` for the other.
pub fn aggregate_monthly<I>(rows: I) -> Result<Vec<MonthlyData>>
where
    I: IntoIterator<Item = (DateTime<Utc>, TransactionType, f64)>,
{
    let mut months: BTreeMap<(i32, u32), MonthlyData> = BTreeMap::new();

    for (date, kind, amount) in rows {
        let key = (date.year(), date.month());
        let month = match months.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(MonthlyData::empty(month_label(key.0, key.1)?)),
        };
        match kind {
            TransactionType::Income => month.income += amount,
            TransactionType::Expense => month.expenses += amount,
        }
    }

    Ok(months.into_values().collect())
}

/// Human readable month label, e.g. `"Jan 2025"`.
pub fn month_label(year: i32, month: u32) -> Result<String> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.format("%b %Y").to_string())
        .ok_or_else(|| ComputeError::Date(format!("Invalid month {}-{}", year, month)))
}

/// Sum of `amount` over every transaction of the given kind, zero if none.
async fn sum_of_kind<C>(conn: &C, kind: TransactionType) -> Result<f64>
where
    C: ConnectionTrait,
{
    let total = transaction::Entity::find()
        .select_only()
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(transaction::Column::Kind.eq(kind))
        .into_tuple::<Option<f64>>()
        .one(conn)
        .await?
        .flatten()
        .unwrap_or(0.0);

    Ok(total)
}

fn to_transaction_dto(
    (transaction, category): (transaction::Model, Option<category::Model>),
) -> Result<TransactionDto> {
    match category {
        Some(category) => Ok(TransactionDto::from_parts(transaction, category)),
        None => Err(ComputeError::MissingCategory(transaction.id)),
    }
}
