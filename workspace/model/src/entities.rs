//! Root for the SeaORM entity modules of the finance tracker.
//!
//! Two tables: `categories` and `transactions`, with a foreign key from each
//! transaction to the category it is filed under.

pub mod category;
pub mod transaction;

pub use transaction::TransactionType;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::category::Entity as Category;
    pub use super::transaction::Entity as Transaction;
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let salary = category::ActiveModel {
            name: Set("Salary".to_string()),
            kind: Set(TransactionType::Income),
            color: Set("#10B981".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let rent = category::ActiveModel {
            name: Set("Rent".to_string()),
            kind: Set(TransactionType::Expense),
            color: Set("#ef4444".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let payday = transaction::ActiveModel {
            kind: Set(TransactionType::Income),
            amount: Set(2500.0),
            category_id: Set(salary.id),
            description: Set(Some("January salary".to_string())),
            date: Set(Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        transaction::ActiveModel {
            kind: Set(TransactionType::Expense),
            amount: Set(900.0),
            category_id: Set(rent.id),
            description: Set(None),
            date: Set(Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        assert_eq!(Category::find().all(&db).await?.len(), 2);
        assert_eq!(Transaction::find().all(&db).await?.len(), 2);

        // Walk the relation in both directions
        let owner = payday.find_related(Category).one(&db).await?;
        assert_eq!(owner.map(|c| c.name), Some("Salary".to_string()));

        let rent_rows = rent.find_related(Transaction).all(&db).await?;
        assert_eq!(rent_rows.len(), 1);
        assert_eq!(rent_rows[0].amount, 900.0);

        // A referenced category cannot be removed
        assert!(rent.clone().delete(&db).await.is_err());

        // Once its transactions are gone it can
        for row in rent_rows {
            row.delete(&db).await?;
        }
        rent.delete(&db).await?;
        assert_eq!(Category::find().all(&db).await?.len(), 1);

        Ok(())
    }
}
