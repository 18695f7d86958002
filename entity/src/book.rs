use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier of the volume in the external metadata provider.
    pub external_id: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub picture_url: Option<String>,
    pub pages: Option<i32>,
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_shelf::Entity")]
    BookShelf,
}

impl Related<super::book_shelf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookShelf.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
