//! Data Transfer Objects for HTTP requests and responses.

pub mod create;
pub mod health;
