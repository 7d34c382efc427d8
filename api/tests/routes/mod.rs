mod carts_test;
mod health_test;
mod menu_test;
mod users_test;
