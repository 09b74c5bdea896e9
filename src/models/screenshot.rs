use serde::{Deserialize, Serialize};

/// An image found in the screenshots directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// URL path the site serves the image from, e.g. `/screenshots/01-menu.png`.
    pub path: String,
    /// Human-readable text derived from the file name. Never empty.
    pub alt_text: String,
}
