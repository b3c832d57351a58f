//! Data model shared between the selection core and the presentation layer.

mod pane_data;
mod post;
mod tab;

pub use pane_data::PaneData;
pub use post::Post;
pub use tab::Tab;
