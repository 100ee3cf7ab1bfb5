//! Conversions from storage entities to transport types.

use model::entities::{category, transaction};

use crate::{CategoryDto, TransactionDto};

impl From<category::Model> for CategoryDto {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            color: model.color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TransactionDto {
    /// Builds the response for a transaction and the category it references.
    pub fn from_parts(model: transaction::Model, category: category::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
            amount: model.amount,
            category_id: model.category_id,
            description: model.description,
            date: model.date,
            created_at: model.created_at,
            updated_at: model.updated_at,
            category: CategoryDto::from(category),
        }
    }
}
