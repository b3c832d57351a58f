use thiserror::Error;

/// Errors that can occur when interpreting pane input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaneError {
    /// A raw tab identifier did not match any registered tab.
    #[error("unknown tab identifier '{id}'")]
    UnknownTab { id: String },
}
