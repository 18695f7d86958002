use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookShelf::Table)
                    .if_not_exists()
                    .col(pk_auto(BookShelf::Id))
                    .col(integer(BookShelf::BookId))
                    .col(string(BookShelf::Shelf))
                    .col(
                        timestamp_with_time_zone(BookShelf::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_shelf_book_id")
                            .from(BookShelf::Table, BookShelf::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_shelf_book_id_shelf")
                    .table(BookShelf::Table)
                    .col(BookShelf::BookId)
                    .col(BookShelf::Shelf)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookShelf::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookShelf {
    Table,
    Id,
    BookId,
    Shelf,
    CreatedAt,
}
