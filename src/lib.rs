mod client;
mod decode;
mod error;
mod fetcher;
pub mod models;

pub use client::AppStoreClient;
pub use error::AppStoreError;
pub use fetcher::{DataFetcher, FetchError, NetworkFetcher};
pub use models::App;

pub type Result<T> = std::result::Result<T, AppStoreError>;
