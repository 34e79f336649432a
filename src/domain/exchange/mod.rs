//! HTTP value types shared by the caching core

mod headers;
mod request;
mod response;
mod status;

pub use headers::Headers;
pub use request::{HttpRequest, RequestDescriptor};
pub use response::HttpResponse;
pub use status::canonical_reason;
