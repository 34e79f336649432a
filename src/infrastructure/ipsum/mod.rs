//! Bacon Ipsum demo client

mod client;
mod request;

pub use client::{IpsumClient, DEFAULT_BASE_URL};
pub use request::{FillerType, IpsumRequest};
