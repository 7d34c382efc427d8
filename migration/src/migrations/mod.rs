pub mod m202510190001_create_users;
pub mod m202510190002_create_menu_items;
pub mod m202510190003_create_reviews;
pub mod m202510190004_create_carts;
