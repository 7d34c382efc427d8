use db::models::cart::NewCartItem;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /carts`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default)]
    pub menu_id: String,

    #[validate(email(message = "A valid userEmail is required"))]
    pub user_email: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[serde(default)]
    pub price: f64,
}

impl From<AddToCartRequest> for NewCartItem {
    fn from(req: AddToCartRequest) -> Self {
        Self {
            menu_id: req.menu_id,
            user_email: req.user_email,
            name: req.name,
            image: req.image,
            price: req.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}
