use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::object_id::ObjectId;
use crate::results::InsertResult;

/// A customer testimonial shown on the landing page.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub seq: i64,
    #[sea_orm(unique)]
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        details: &str,
        rating: f64,
    ) -> Result<InsertResult, DbErr> {
        let id = ObjectId::new().to_hex();
        let review = ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_owned()),
            details: Set(details.to_owned()),
            rating: Set(rating),
            ..Default::default()
        };

        review.insert(db).await?;
        Ok(InsertResult::new(id))
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Seq).all(db).await
    }
}
