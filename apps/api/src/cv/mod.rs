// CV document: serde model, file loading, and HTTP handlers.

pub mod handlers;
pub mod loader;
pub mod models;
