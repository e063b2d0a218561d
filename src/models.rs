use serde::{Deserialize, Serialize};

/// One application entry from the top paid applications feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Display name
    pub name: String,
    /// Description text
    pub summary: String,
    /// URL of the first image listed for the entry, empty when the feed
    /// lists none
    pub thumbnail_url: String,
}
