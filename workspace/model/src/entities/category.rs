use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, RelationTrait, Set};

use super::transaction::{self, TransactionType};

/// A named bucket that classifies transactions as income or expense
/// (e.g. "Groceries" or "Salary").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Case-sensitive and unique across all categories.
    #[sea_orm(unique)]
    pub name: String,
    /// Fixed when the category is created; used to classify aggregates.
    #[sea_orm(column_name = "type")]
    pub kind: TransactionType,
    /// Display colour in `#RRGGBB` form.
    pub color: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A category is referenced by zero or more transactions.
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl Related<transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl Entity {
    /// All categories ordered by name ascending.
    pub fn find_ordered() -> Select<Entity> {
        Self::find().order_by_asc(Column::Name)
    }

    /// Looks up the category carrying exactly this name.
    pub fn find_by_name(name: &str) -> Select<Entity> {
        Self::find().filter(Column::Name.eq(name))
    }
}

impl Model {
    /// Counts the transactions that reference this category.
    pub async fn count_transactions<C>(&self, db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        transaction::Entity::find()
            .filter(transaction::Column::CategoryId.eq(self.id))
            .count(db)
            .await
    }
}
