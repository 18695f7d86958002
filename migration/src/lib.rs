pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_confirmation_token_table;
mod m20260301_000003_create_book_table;
mod m20260301_000004_create_book_shelf_table;
mod m20260302_000005_create_topic_table;
mod m20260302_000006_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_confirmation_token_table::Migration),
            Box::new(m20260301_000003_create_book_table::Migration),
            Box::new(m20260301_000004_create_book_shelf_table::Migration),
            Box::new(m20260302_000005_create_topic_table::Migration),
            Box::new(m20260302_000006_create_comment_table::Migration),
        ]
    }
}
