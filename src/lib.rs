//! A search-and-browse pane: a query input plus two tabbed post lists that
//! switch to search results whenever the query is non-empty.
//!
//! The crate splits into a pure selection core ([`view`]) that decides which
//! collection is visible and maps posts to display entries, a state bundle
//! ([`state::PaneState`]) mirroring what the owning parent forwards, and a
//! ratatui presentation layer ([`render`]). The root module re-exports the
//! pieces embedders need so they can avoid digging through the module
//! hierarchy.

pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod style;
pub mod types;
pub mod view;

pub use config::{TabLabels, UiLabels};
pub use error::PaneError;
pub use render::render_pane;
pub use state::PaneState;
pub use style::Theme;
pub use types::{PaneData, Post, Tab};
pub use view::{Entry, VisibleList, detail_href, entries, select};
