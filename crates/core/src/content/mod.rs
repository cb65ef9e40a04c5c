//! Recipe content: data model and the JSON-backed store

mod model;
mod store;

pub use model::*;
pub use store::ContentStore;
