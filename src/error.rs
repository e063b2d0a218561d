use thiserror::Error;

/// Closed set of failure kinds for a feed request.
///
/// Every failure path of [`crate::AppStoreClient::get_top_apps`] maps into
/// one of these variants; [`AppStoreError::Decode`] is the catch-all for
/// decode failures the two named categories do not cover.
#[derive(Debug, Error)]
pub enum AppStoreError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Required key `{0}` is missing from the feed payload")]
    KeyNotFound(String),

    #[error("Unexpected value shape in the feed payload")]
    TypeMismatch,

    #[error("Failed to decode feed payload: {0}")]
    Decode(String),
}
