pub mod cart;
pub mod menu_item;
pub mod review;
pub mod user;

pub use cart::Entity as Cart;
pub use menu_item::Entity as MenuItem;
pub use review::Entity as Review;
pub use user::Entity as User;
