use super::Post;

/// Post collections displayed by the pane, supplied pre-computed by the
/// parent: one collection per tab plus the current search results.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaneData {
    pub initial_query: String,
    pub a_posts: Vec<Post>,
    pub b_posts: Vec<Post>,
    pub search_posts: Vec<Post>,
}

impl PaneData {
    /// Create an empty [`PaneData`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query that should be shown when the pane starts.
    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Replace the collection behind the A tab.
    #[must_use]
    pub fn with_a_posts(mut self, posts: Vec<Post>) -> Self {
        self.a_posts = posts;
        self
    }

    /// Replace the collection behind the B tab.
    #[must_use]
    pub fn with_b_posts(mut self, posts: Vec<Post>) -> Self {
        self.b_posts = posts;
        self
    }

    /// Replace the search result collection.
    #[must_use]
    pub fn with_search_posts(mut self, posts: Vec<Post>) -> Self {
        self.search_posts = posts;
        self
    }
}
