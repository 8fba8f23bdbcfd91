mod data;
mod get;
mod page;
mod props;
mod summary_card;

pub use self::{data::data, get::get};
