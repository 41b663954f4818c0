pub mod a001_user;
pub mod a002_product;
pub mod a003_sale;
