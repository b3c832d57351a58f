use std::str::FromStr;

use crate::error::PaneError;

/// Identifies one of the two fixed browsing tabs.
///
/// Tabs are static: they are never created or destroyed at runtime, and the
/// pane holds the active one as a raw identifier string so that an
/// unrecognized id coming from the parent can still be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    A,
    B,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Return the identifier for this tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Resolve a raw identifier to a tab.
    ///
    /// # Errors
    ///
    /// Returns [`PaneError::UnknownTab`] when the identifier does not match
    /// any registered tab.
    pub fn parse(id: &str) -> Result<Self, PaneError> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == id)
            .ok_or_else(|| PaneError::UnknownTab { id: id.to_string() })
    }
}

impl FromStr for Tab {
    type Err = PaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
