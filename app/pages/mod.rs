pub mod index;
pub mod models;
