use sea_orm::entity::prelude::*;

/// One AI-generated review row. Scraped reviews are never persisted;
/// every row here originates from the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    pub overall_rating: String,
    pub review_title: String,
    pub author: String,
    pub review_date: String,
    pub rating: String,
    pub review: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
