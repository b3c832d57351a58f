//! Aggregate state for the pane, forwarded from the parent that owns it.

use crate::config::UiLabels;
use crate::types::{PaneData, Post, Tab};
use crate::view::{self, Entry, VisibleList};

/// Cached display entries for one incoming collection.
///
/// Rebuilt only when that collection is replaced, so repeated renders reuse
/// the same entries. Purely an optimization: output must match a fresh
/// mapping of the collection.
#[derive(Debug, Default)]
struct EntryBuffer {
    entries: Vec<Entry>,
}

impl EntryBuffer {
    fn rebuild(&mut self, posts: &[Post]) {
        self.entries = view::entries(posts);
    }
}

/// State bundle the pane is a pure function of: the current query text, the
/// focus flag, the active tab identifier, and the three post collections.
///
/// The operations mirror the callbacks the original parent wires up: query
/// changes, tab changes, and focus/blur. The focus flag is carried opaquely;
/// only the presentation layer reads it.
#[derive(Debug)]
pub struct PaneState {
    data: PaneData,
    query: String,
    active_tab: String,
    focused: bool,
    labels: UiLabels,
    a_buffer: EntryBuffer,
    b_buffer: EntryBuffer,
    search_buffer: EntryBuffer,
}

impl PaneState {
    /// Construct a pane over the given collections, starting on the A tab
    /// with the data's initial query.
    #[must_use]
    pub fn new(data: PaneData) -> Self {
        let query = data.initial_query.clone();
        let mut state = Self {
            query,
            active_tab: Tab::A.as_str().to_string(),
            focused: false,
            labels: UiLabels::default(),
            a_buffer: EntryBuffer::default(),
            b_buffer: EntryBuffer::default(),
            search_buffer: EntryBuffer::default(),
            data,
        };
        state.rebuild_buffers();
        state
    }

    /// Replace the label configuration.
    #[must_use]
    pub fn with_labels(mut self, labels: UiLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Current search input text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search input text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Raw identifier of the active tab.
    #[must_use]
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// Switch to a known tab.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab.as_str().to_string();
    }

    /// Forward a raw tab identifier from the parent, verbatim. An identifier
    /// that names no tab makes the pane show nothing while the query stays
    /// empty.
    pub fn set_tab_id(&mut self, id: impl Into<String>) {
        self.active_tab = id.into();
    }

    /// Whether the search input currently holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Mark the search input focused.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Mark the search input blurred.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// The label configuration used when rendering.
    #[must_use]
    pub fn labels(&self) -> &UiLabels {
        &self.labels
    }

    /// The collections currently backing the pane.
    #[must_use]
    pub fn data(&self) -> &PaneData {
        &self.data
    }

    /// Replace every collection at once.
    pub fn replace_data(&mut self, data: PaneData) {
        self.data = data;
        self.rebuild_buffers();
    }

    /// Replace the collection behind the A tab.
    pub fn replace_a_posts(&mut self, posts: Vec<Post>) {
        self.data.a_posts = posts;
        self.a_buffer.rebuild(&self.data.a_posts);
    }

    /// Replace the collection behind the B tab.
    pub fn replace_b_posts(&mut self, posts: Vec<Post>) {
        self.data.b_posts = posts;
        self.b_buffer.rebuild(&self.data.b_posts);
    }

    /// Replace the search results, typically after each keystroke.
    pub fn replace_search_posts(&mut self, posts: Vec<Post>) {
        self.data.search_posts = posts;
        self.search_buffer.rebuild(&self.data.search_posts);
    }

    /// Which collection is visible for the current query and tab.
    #[must_use]
    pub fn visible(&self) -> VisibleList<'_> {
        view::select(
            &self.active_tab,
            &self.query,
            Some(&self.data.a_posts),
            Some(&self.data.b_posts),
            Some(&self.data.search_posts),
        )
    }

    /// Display entries for the visible collection, served from the per-list
    /// caches.
    #[must_use]
    pub fn visible_entries(&self) -> &[Entry] {
        match self.visible() {
            VisibleList::Search(_) => &self.search_buffer.entries,
            VisibleList::Tab(Tab::A, _) => &self.a_buffer.entries,
            VisibleList::Tab(Tab::B, _) => &self.b_buffer.entries,
            VisibleList::None => &[],
        }
    }

    fn rebuild_buffers(&mut self) {
        self.a_buffer.rebuild(&self.data.a_posts);
        self.b_buffer.rebuild(&self.data.b_posts);
        self.search_buffer.rebuild(&self.data.search_posts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> PaneState {
        PaneState::new(
            PaneData::new()
                .with_a_posts(vec![Post::new(1, "first", "a body", "a")])
                .with_b_posts(vec![Post::new(2, "second", "b body", "b")])
                .with_search_posts(vec![Post::new(9, "hit", "s body", "x")]),
        )
    }

    #[test]
    fn active_tab_shows_only_its_collection() {
        let state = sample_state();
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![1]);
    }

    #[test]
    fn query_overrides_the_active_tab() {
        let mut state = sample_state();
        state.set_query("foo");
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![9]);

        state.set_tab(Tab::B);
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![9], "query should win for every tab");
    }

    #[test]
    fn clearing_the_query_returns_to_the_tab() {
        let mut state = sample_state();
        state.set_query("foo");
        state.set_tab(Tab::B);
        state.set_query("");
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![2]);
    }

    #[test]
    fn unknown_tab_id_shows_nothing() {
        let mut state = sample_state();
        state.set_tab_id("c");
        assert!(state.visible_entries().is_empty());
        assert_eq!(state.visible(), VisibleList::None);
    }

    #[test]
    fn cached_entries_match_a_fresh_mapping() {
        let mut state = sample_state();
        for (tab, query) in [("a", ""), ("b", ""), ("a", "foo"), ("c", "")] {
            state.set_tab_id(tab);
            state.set_query(query);
            assert_eq!(
                state.visible_entries(),
                view::entries(state.visible().posts()).as_slice()
            );
        }
    }

    #[test]
    fn replacing_search_posts_refreshes_their_entries() {
        let mut state = sample_state();
        state.set_query("foo");
        state.replace_search_posts(vec![Post::new(4, "newer hit", "", "y")]);
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![4]);
    }

    #[test]
    fn focus_flag_is_forwarded_opaquely() {
        let mut state = sample_state();
        assert!(!state.is_focused());
        state.focus();
        assert!(state.is_focused());
        let before: Vec<Entry> = state.visible_entries().to_vec();
        state.blur();
        assert_eq!(state.visible_entries(), before.as_slice());
    }

    #[test]
    fn initial_query_starts_the_pane_in_search() {
        let state = PaneState::new(
            PaneData::new()
                .with_initial_query("q")
                .with_search_posts(vec![Post::new(3, "hit", "", "x")]),
        );
        let keys: Vec<u64> = state.visible_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3]);
    }
}
