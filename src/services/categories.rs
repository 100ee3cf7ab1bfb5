use common::CategoryDto;
use model::entities::category;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::constraint_error;
use crate::error::ApiError;
use crate::validation::CategoryPayload;

pub const CATEGORY_NOT_FOUND: &str = "Category not found";
pub const DUPLICATE_NAME: &str = "Category with this name already exists";
pub const STILL_REFERENCED: &str = "Cannot delete category. It still has transactions.";

/// Create, read, update and delete for categories.
pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories ordered by name.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CategoryDto>, ApiError> {
        let categories = category::Entity::find_ordered().all(self.db).await?;
        debug!("Retrieved {} categories", categories.len());
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<CategoryDto, ApiError> {
        category::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| ApiError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, payload: CategoryPayload) -> Result<CategoryDto, ApiError> {
        let txn = self.db.begin().await?;

        if category::Entity::find_by_name(&payload.name).one(&txn).await?.is_some() {
            warn!("Category name '{}' already exists", payload.name);
            return Err(ApiError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let created = category::ActiveModel {
            name: Set(payload.name),
            kind: Set(payload.kind),
            color: Set(payload.color),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| constraint_error(e, DUPLICATE_NAME, CATEGORY_NOT_FOUND))?;

        txn.commit().await?;

        info!("Category created successfully with ID: {}", created.id);
        Ok(CategoryDto::from(created))
    }

    /// Replaces name, type and colour of an existing category.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, payload: CategoryPayload) -> Result<CategoryDto, ApiError> {
        let txn = self.db.begin().await?;

        let existing = category::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                warn!("Category {} not found", id);
                ApiError::NotFound(CATEGORY_NOT_FOUND.to_string())
            })?;

        let name_taken = category::Entity::find_by_name(&payload.name)
            .filter(category::Column::Id.ne(id))
            .one(&txn)
            .await?
            .is_some();
        if name_taken {
            warn!("Category name '{}' is used by another category", payload.name);
            return Err(ApiError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(payload.name);
        active.kind = Set(payload.kind);
        active.color = Set(payload.color);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| constraint_error(e, DUPLICATE_NAME, CATEGORY_NOT_FOUND))?;

        txn.commit().await?;

        info!("Category {} updated successfully", id);
        Ok(CategoryDto::from(updated))
    }

    /// Deletes a category that no transaction references.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let txn = self.db.begin().await?;

        let existing = category::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                warn!("Category {} not found", id);
                ApiError::NotFound(CATEGORY_NOT_FOUND.to_string())
            })?;

        let dependents = existing.count_transactions(&txn).await?;
        if dependents > 0 {
            warn!("Category {} still has {} transactions", id, dependents);
            return Err(ApiError::Conflict(blocked_by_dependents(dependents)));
        }

        existing.delete(&txn).await.map_err(delete_error)?;

        txn.commit().await?;

        info!("Category {} deleted successfully", id);
        Ok(())
    }
}

fn blocked_by_dependents(count: u64) -> String {
    format!("Cannot delete category. It has {} transactions.", count)
}

/// A transaction inserted after the dependent count was taken trips the
/// RESTRICT foreign key; the new count is unknown at that point.
fn delete_error(err: DbErr) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            warn!("Category delete blocked by the foreign key");
            ApiError::Conflict(STILL_REFERENCED.to_string())
        }
        _ => ApiError::Database(err),
    }
}
