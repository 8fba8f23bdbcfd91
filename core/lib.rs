/*!
Fitted model records and the model registry that the dashboard reads from.
*/

#![allow(clippy::tabs_in_doc_comments)]

pub mod model;
pub mod registry;

pub use self::{model::Model, registry::ModelRegistry};
