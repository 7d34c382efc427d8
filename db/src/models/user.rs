use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::object_id::ObjectId;
use crate::results::{DeleteResult, InsertResult, UpdateResult};

/// Represents a registered user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Insertion order; never exposed.
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub seq: i64,
    /// Typed identifier in hex form.
    #[sea_orm(unique)]
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    /// Lookup key for the admin gate. Not unique at the schema level.
    pub email: String,
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Closed set of user roles. Only `Admin` is privileged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "standard")]
    Standard,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Registers a user with the `Standard` role.
    pub async fn create(
        db: &DbConn,
        name: Option<&str>,
        email: &str,
        photo_url: Option<&str>,
    ) -> Result<InsertResult, DbErr> {
        let id = ObjectId::new().to_hex();
        let user = ActiveModel {
            id: Set(id.clone()),
            name: Set(name.map(str::to_owned)),
            email: Set(email.to_owned()),
            photo_url: Set(photo_url.map(str::to_owned)),
            role: Set(Role::Standard),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        user.insert(db).await?;
        Ok(InsertResult::new(id))
    }

    /// First user registered under `email`, in insertion order.
    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::Seq)
            .one(db)
            .await
    }

    pub async fn find_by_object_id(db: &DbConn, id: &ObjectId) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Id.eq(id.to_hex()))
            .one(db)
            .await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Seq).all(db).await
    }

    pub async fn delete_by_object_id(db: &DbConn, id: &ObjectId) -> Result<DeleteResult, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(id.to_hex()))
            .exec(db)
            .await?;
        Ok(DeleteResult::new(res.rows_affected))
    }

    /// Sets the role of the identified user to `Admin`.
    ///
    /// `modifiedCount` excludes users that were already admins.
    pub async fn promote_to_admin(db: &DbConn, id: &ObjectId) -> Result<UpdateResult, DbErr> {
        let Some(user) = Self::find_by_object_id(db, id).await? else {
            return Ok(UpdateResult::new(0, 0));
        };
        if user.is_admin() {
            return Ok(UpdateResult::new(1, 0));
        }

        let mut active: ActiveModel = user.into();
        active.role = Set(Role::Admin);
        active.update(db).await?;
        Ok(UpdateResult::new(1, 1))
    }
}
