use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfirmationToken::Table)
                    .if_not_exists()
                    .col(pk_auto(ConfirmationToken::Id))
                    .col(string_uniq(ConfirmationToken::Token))
                    .col(integer_uniq(ConfirmationToken::UserId))
                    .col(
                        timestamp_with_time_zone(ConfirmationToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_confirmation_token_user_id")
                            .from(ConfirmationToken::Table, ConfirmationToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfirmationToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfirmationToken {
    Table,
    Id,
    Token,
    UserId,
    CreatedAt,
}
