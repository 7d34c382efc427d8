use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, PaginatorTrait, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::object_id::ObjectId;
use crate::resolver::RecordKey;
use crate::results::{DeleteResult, InsertResult, UpdateResult};

/// A dish on the menu, stored in the `menu_items` table.
///
/// The identifier is either a generated typed identifier or an arbitrary string
/// carried over from imported data; `id_kind` records which. Both kinds are
/// valid persisted state.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub seq: i64,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip)]
    pub id_kind: IdKind,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "menu_item_id_kind")]
pub enum IdKind {
    #[sea_orm(string_value = "object_id")]
    ObjectId,

    #[sea_orm(string_value = "string")]
    Raw,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new menu item. A caller-supplied `id` is stored as a raw string.
#[derive(Debug, Clone, Default)]
pub struct NewMenuItem {
    pub id: Option<String>,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: f64,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub recipe: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.recipe.is_none()
            && self.image.is_none()
            && self.category.is_none()
            && self.price.is_none()
    }
}

fn key_condition(key: &RecordKey) -> Condition {
    let kind = match key {
        RecordKey::Typed(_) => IdKind::ObjectId,
        RecordKey::Raw(_) => IdKind::Raw,
    };
    Condition::all()
        .add(Column::Id.eq(key.as_text()))
        .add(Column::IdKind.eq(kind))
}

fn category_condition(category: Option<&str>) -> Condition {
    // An absent filter matches items without a category, i.e. none.
    match category {
        Some(c) => Condition::all().add(Column::Category.eq(c)),
        None => Condition::all().add(Column::Category.is_null()),
    }
}

impl Model {
    pub async fn create(db: &DbConn, item: NewMenuItem) -> Result<InsertResult, DbErr> {
        let (id, id_kind) = match item.id {
            Some(raw) => (raw, IdKind::Raw),
            None => (ObjectId::new().to_hex(), IdKind::ObjectId),
        };

        let active = ActiveModel {
            id: Set(id.clone()),
            id_kind: Set(id_kind),
            name: Set(item.name),
            recipe: Set(item.recipe),
            image: Set(item.image),
            category: Set(item.category),
            price: Set(item.price),
            ..Default::default()
        };

        active.insert(db).await?;
        Ok(InsertResult::new(id))
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Seq).all(db).await
    }

    pub async fn count_by_category(db: &DbConn, category: Option<&str>) -> Result<u64, DbErr> {
        Entity::find()
            .filter(category_condition(category))
            .count(db)
            .await
    }

    /// Items in `category`, in insertion order, skipping `skip` and returning at most `limit`.
    pub async fn find_page(
        db: &DbConn,
        category: Option<&str>,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(category_condition(category))
            .order_by_asc(Column::Seq)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
    }

    pub async fn find_by_key(db: &DbConn, key: &RecordKey) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(key_condition(key)).one(db).await
    }

    /// Applies `changes` to the item stored under `key`.
    pub async fn update_by_key(
        db: &DbConn,
        key: &RecordKey,
        changes: &MenuItemChanges,
    ) -> Result<UpdateResult, DbErr> {
        if changes.is_empty() {
            let matched = Entity::find().filter(key_condition(key)).count(db).await?;
            return Ok(UpdateResult::new(matched, 0));
        }

        let mut update = Entity::update_many().filter(key_condition(key));
        if let Some(name) = &changes.name {
            update = update.col_expr(Column::Name, Expr::value(name.clone()));
        }
        if let Some(recipe) = &changes.recipe {
            update = update.col_expr(Column::Recipe, Expr::value(recipe.clone()));
        }
        if let Some(image) = &changes.image {
            update = update.col_expr(Column::Image, Expr::value(image.clone()));
        }
        if let Some(category) = &changes.category {
            update = update.col_expr(Column::Category, Expr::value(category.clone()));
        }
        if let Some(price) = changes.price {
            update = update.col_expr(Column::Price, Expr::value(price));
        }

        let res = update.exec(db).await?;
        Ok(UpdateResult::new(res.rows_affected, res.rows_affected))
    }

    pub async fn delete_by_key(db: &DbConn, key: &RecordKey) -> Result<DeleteResult, DbErr> {
        let res = Entity::delete_many()
            .filter(key_condition(key))
            .exec(db)
            .await?;
        Ok(DeleteResult::new(res.rows_affected))
    }
}
