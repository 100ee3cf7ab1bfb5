use common::TransactionDto;
use model::entities::{category, transaction};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::constraint_error;
use crate::error::ApiError;
use crate::services::categories::CATEGORY_NOT_FOUND;
use crate::validation::TransactionPayload;

pub const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

/// Largest offset or page size the SQL drivers can bind (a signed 64-bit value).
const MAX_BOUND: u64 = i64::MAX as u64;

/// Create, read, update and delete for transactions.
///
/// Every transaction returned carries its category embedded.
pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of transactions, newest financial event first.
    ///
    /// `skip` and `limit` are unbounded; anything past `i64::MAX` behaves like
    /// `i64::MAX`.
    #[instrument(skip(self))]
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<TransactionDto>, ApiError> {
        let skip = skip.min(MAX_BOUND);
        let limit = limit.min(MAX_BOUND);
        let rows = transaction::Entity::find_newest_with_category()
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;
        debug!("Retrieved {} transactions", rows.len());

        rows.into_iter().map(|(t, c)| with_category(t, c)).collect()
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<TransactionDto, ApiError> {
        let (found, category) = transaction::Entity::find_by_id_with_category(id)
            .one(self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound(TRANSACTION_NOT_FOUND.to_string()))?;
        with_category(found, category)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, payload: TransactionPayload) -> Result<TransactionDto, ApiError> {
        let txn = self.db.begin().await?;

        let category = find_category(&txn, payload.category_id).await?;

        let created = transaction::ActiveModel {
            kind: Set(payload.kind),
            amount: Set(payload.amount),
            category_id: Set(payload.category_id),
            description: Set(payload.description),
            date: Set(payload.date),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| constraint_error(e, TRANSACTION_NOT_FOUND, CATEGORY_NOT_FOUND))?;

        txn.commit().await?;

        info!("Transaction created successfully with ID: {}", created.id);
        Ok(TransactionDto::from_parts(created, category))
    }

    /// Replaces every field of an existing transaction.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i32,
        payload: TransactionPayload,
    ) -> Result<TransactionDto, ApiError> {
        let txn = self.db.begin().await?;

        let existing = transaction::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                warn!("Transaction {} not found", id);
                ApiError::NotFound(TRANSACTION_NOT_FOUND.to_string())
            })?;

        let category = find_category(&txn, payload.category_id).await?;

        let mut active: transaction::ActiveModel = existing.into();
        active.kind = Set(payload.kind);
        active.amount = Set(payload.amount);
        active.category_id = Set(payload.category_id);
        active.description = Set(payload.description);
        active.date = Set(payload.date);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| constraint_error(e, TRANSACTION_NOT_FOUND, CATEGORY_NOT_FOUND))?;

        txn.commit().await?;

        info!("Transaction {} updated successfully", id);
        Ok(TransactionDto::from_parts(updated, category))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = transaction::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            warn!("Transaction {} not found", id);
            return Err(ApiError::NotFound(TRANSACTION_NOT_FOUND.to_string()));
        }

        info!("Transaction {} deleted successfully", id);
        Ok(())
    }
}

async fn find_category<C>(conn: &C, category_id: i32) -> Result<category::Model, ApiError>
where
    C: sea_orm::ConnectionTrait,
{
    category::Entity::find_by_id(category_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            warn!("Category {} referenced by transaction does not exist", category_id);
            ApiError::Reference(CATEGORY_NOT_FOUND.to_string())
        })
}

fn with_category(
    found: transaction::Model,
    category: Option<category::Model>,
) -> Result<TransactionDto, ApiError> {
    match category {
        Some(category) => Ok(TransactionDto::from_parts(found, category)),
        None => Err(ApiError::Internal(format!(
            "Transaction {} references missing category {}",
            found.id, found.category_id
        ))),
    }
}
