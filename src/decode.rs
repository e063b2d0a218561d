use serde_json::Value;

use crate::error::AppStoreError;
use crate::models::App;
use crate::Result;

/// Decode the feed envelope `{ "feed": { "entry": [...] } }` into entries.
///
/// A hand-rolled walk over `serde_json::Value` rather than derived
/// deserialization, so every failure classifies uniformly into the
/// [`AppStoreError`] taxonomy: a missing key reports the key name, a value
/// with the wrong shape reports a type mismatch, anything else (syntax
/// error, truncated payload) falls through to [`AppStoreError::Decode`].
pub(crate) fn decode_feed(bytes: &[u8]) -> Result<Vec<App>> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|e| AppStoreError::Decode(e.to_string()))?;

    let feed = required_key(&root, "feed")?;
    let entries = required_key(feed, "entry")?
        .as_array()
        .ok_or(AppStoreError::TypeMismatch)?;

    // Entries are not fault-isolated: one bad entry fails the whole decode
    entries.iter().map(decode_app).collect()
}

/// Decode a single feed entry.
///
/// Name and summary live inside nested `label` wrapper objects. The
/// thumbnail is the first element of the `im:image` list; an empty list
/// yields an empty string, not an error.
pub(crate) fn decode_app(entry: &Value) -> Result<App> {
    let name = label_of(required_key(entry, "im:name")?)?;
    let summary = label_of(required_key(entry, "summary")?)?;

    let images = required_key(entry, "im:image")?
        .as_array()
        .ok_or(AppStoreError::TypeMismatch)?;

    let thumbnail_url = match images.first() {
        Some(image) => label_of(image)?,
        None => String::new(),
    };

    Ok(App {
        name,
        summary,
        thumbnail_url,
    })
}

fn required_key<'a>(value: &'a Value, key: &str) -> Result<&'a Value> {
    value
        .as_object()
        .ok_or(AppStoreError::TypeMismatch)?
        .get(key)
        .ok_or_else(|| AppStoreError::KeyNotFound(key.to_string()))
}

fn label_of(value: &Value) -> Result<String> {
    required_key(value, "label")?
        .as_str()
        .map(str::to_owned)
        .ok_or(AppStoreError::TypeMismatch)
}
