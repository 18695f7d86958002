use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_null(Book::ExternalId))
                    .col(string(Book::Title))
                    .col(string_null(Book::Author))
                    .col(integer(Book::Year).default(1970))
                    .col(text_null(Book::Description))
                    .col(string_null(Book::PictureUrl))
                    .col(integer_null(Book::Pages))
                    .col(double(Book::Rating).default(0.0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_external_id")
                    .table(Book::Table)
                    .col(Book::ExternalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_title")
                    .table(Book::Table)
                    .col(Book::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    ExternalId,
    Title,
    Author,
    Year,
    Description,
    PictureUrl,
    Pages,
    Rating,
}
