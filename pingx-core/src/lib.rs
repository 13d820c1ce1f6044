pub mod api;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod format;

pub use api::{ApiService, Outcome, DEFAULT_BASE_URL};
pub use client::{HttpClient, HttpMethod, RawResponse, TransportError};
pub use dispatch::Dispatcher;
pub use error::ApiError;
