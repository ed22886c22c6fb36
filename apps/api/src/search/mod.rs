// Search pipeline and its HTTP surface.
// The service owns the request flow; dates/export are display helpers.

pub mod dates;
pub mod export;
pub mod handlers;
pub mod service;

pub use service::{SearchRequest, SearchService};
