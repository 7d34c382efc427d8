use db::models::menu_item::{MenuItemChanges, NewMenuItem};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /singleMenu`.
///
/// `_id` is optional; when present the item keeps that text as a raw string
/// identifier, otherwise a typed identifier is generated.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub recipe: String,

    #[serde(default)]
    pub image: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

impl From<CreateMenuItemRequest> for NewMenuItem {
    fn from(req: CreateMenuItemRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            recipe: req.recipe,
            image: req.image,
            category: req.category,
            price: req.price,
        }
    }
}

/// Body of `PATCH /updateMenuItem/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub recipe: Option<String>,

    pub image: Option<String>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
}

impl From<UpdateMenuItemRequest> for MenuItemChanges {
    fn from(req: UpdateMenuItemRequest) -> Self {
        Self {
            name: req.name,
            recipe: req.recipe,
            image: req.image,
            category: req.category,
            price: req.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuCountQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuCountResponse {
    pub count: u64,
}

/// Query of `GET /allMenus`.
#[derive(Debug, Deserialize, Validate)]
pub struct AllMenusQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,

    #[validate(range(min = 1, message = "size must be at least 1"))]
    pub size: Option<u64>,

    pub filter: Option<String>,
}

impl AllMenusQuery {
    /// Rows to skip: `(page - 1) * size`, or none without a size.
    pub fn skip(&self) -> u64 {
        match self.size {
            Some(size) => (self.page.unwrap_or(1).saturating_sub(1)).saturating_mul(size),
            None => 0,
        }
    }
}
