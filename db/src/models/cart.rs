use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::object_id::ObjectId;
use crate::results::{DeleteResult, InsertResult};

/// A menu item placed in a user's cart.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "carts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub seq: i64,
    #[sea_orm(unique)]
    #[serde(rename = "_id")]
    pub id: String,
    /// Identifier text of the menu item, in whichever representation it was listed.
    pub menu_id: String,
    pub user_email: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default)]
pub struct NewCartItem {
    pub menu_id: String,
    pub user_email: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}

impl Model {
    pub async fn create(db: &DbConn, item: NewCartItem) -> Result<InsertResult, DbErr> {
        let id = ObjectId::new().to_hex();
        let active = ActiveModel {
            id: Set(id.clone()),
            menu_id: Set(item.menu_id),
            user_email: Set(item.user_email),
            name: Set(item.name),
            image: Set(item.image),
            price: Set(item.price),
            ..Default::default()
        };

        active.insert(db).await?;
        Ok(InsertResult::new(id))
    }

    /// Cart lines owned by `email`. An absent email matches nothing.
    pub async fn find_by_user_email(db: &DbConn, email: Option<&str>) -> Result<Vec<Model>, DbErr> {
        let Some(email) = email else {
            return Ok(Vec::new());
        };

        Entity::find()
            .filter(Column::UserEmail.eq(email))
            .order_by_asc(Column::Seq)
            .all(db)
            .await
    }

    pub async fn delete_by_object_id(db: &DbConn, id: &ObjectId) -> Result<DeleteResult, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(id.to_hex()))
            .exec(db)
            .await?;
        Ok(DeleteResult::new(res.rows_affected))
    }
}
