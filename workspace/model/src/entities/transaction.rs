use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, RelationTrait, SelectTwo, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category;

/// Whether money comes in or goes out.
///
/// Shared by the storage layer, the request payloads and the reporting code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// A single dated financial event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: TransactionType,
    /// Always strictly positive; the sign is carried by `kind`.
    pub amount: f64,
    pub category_id: i32,
    pub description: Option<String>,
    /// When the financial event happened (not when the row was written).
    pub date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Category,
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
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
    /// Transactions joined with their category, newest financial event first.
    ///
    /// Ties on `date` are broken by id so that paging is stable.
    pub fn find_newest_with_category() -> SelectTwo<Entity, category::Entity> {
        Self::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .find_also_related(category::Entity)
    }

    /// A single transaction joined with its category.
    pub fn find_by_id_with_category(id: i32) -> SelectTwo<Entity, category::Entity> {
        Self::find()
            .filter(Column::Id.eq(id))
            .find_also_related(category::Entity)
    }
}
