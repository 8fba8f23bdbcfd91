pub mod health;
pub mod styles;
