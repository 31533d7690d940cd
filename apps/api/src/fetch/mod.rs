// Source-content fetching: URL validation, the reader-service client, and the
// /api/fetch-url(s) proxy routes.

pub mod handlers;
pub mod reader;

pub use reader::{ContentFetcher, ReaderClient};
