mod client;
mod error;
mod traits;
pub mod wire;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use traits::Api;

// Re-exported so callers and test fakes can build `Error::Api` values
// without a direct reqwest dependency.
pub use reqwest::StatusCode;
