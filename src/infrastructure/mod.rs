//! Infrastructure layer - transports, stores and logging

pub mod cache;
pub mod http;
pub mod ipsum;
pub mod logging;
