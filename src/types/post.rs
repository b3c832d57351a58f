use serde::{Deserialize, Serialize};

/// A single post supplied pre-computed by the data layer.
///
/// Posts are read-only as far as this crate is concerned; the parent that
/// owns the pane fetches and refreshes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Category discriminator, used verbatim when building the detail link.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Post {
    /// Construct a [`Post`] from its constituent fields.
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            kind: kind.into(),
        }
    }
}
