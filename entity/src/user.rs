use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored trimmed and lowercased.
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub nickname: String,
    pub enabled: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_one = "super::confirmation_token::Entity")]
    ConfirmationToken,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::confirmation_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfirmationToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
