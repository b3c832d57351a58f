//! The selection core: decides which of the three post collections is
//! visible and maps posts to display-ready entries.

mod entries;

pub use entries::{Entry, detail_href, entries};

use crate::types::{Post, Tab};

/// The one collection the pane shows for a given input state.
///
/// Modeling the choice as a tagged union makes the precedence structural: a
/// tab and the search results can never both apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleList<'a> {
    /// Search results, shown whenever the query is non-empty.
    Search(&'a [Post]),
    /// The collection behind a recognized tab, shown when the query is empty.
    Tab(Tab, &'a [Post]),
    /// Nothing to show: the query is empty and the tab identifier is not a
    /// recognized tab.
    None,
}

impl<'a> VisibleList<'a> {
    /// Return the posts behind the selection.
    #[must_use]
    pub fn posts(self) -> &'a [Post] {
        match self {
            Self::Search(posts) | Self::Tab(_, posts) => posts,
            Self::None => &[],
        }
    }
}

/// Pick which collection the pane shows.
///
/// A non-empty query always selects the search results, regardless of
/// whether `active_tab` names a valid tab. With an empty query the
/// recognized tabs select their collection; anything else selects nothing.
/// The chosen collection is returned by reference, unchanged. Absent
/// collections behave as empty.
#[must_use]
pub fn select<'a>(
    active_tab: &str,
    query: &str,
    a_posts: Option<&'a [Post]>,
    b_posts: Option<&'a [Post]>,
    search_posts: Option<&'a [Post]>,
) -> VisibleList<'a> {
    // Query presence is checked before the tab, with exact emptiness rather
    // than any trimming.
    if !query.is_empty() {
        return VisibleList::Search(search_posts.unwrap_or_default());
    }

    match Tab::parse(active_tab) {
        Ok(Tab::A) => VisibleList::Tab(Tab::A, a_posts.unwrap_or_default()),
        Ok(Tab::B) => VisibleList::Tab(Tab::B, b_posts.unwrap_or_default()),
        Err(_) => VisibleList::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post::new(id, format!("post {id}"), "body", "x")
    }

    #[test]
    fn empty_query_selects_the_active_tab() {
        let a = vec![post(1)];
        let b = vec![post(2)];
        let s = vec![post(9)];

        assert_eq!(
            select("a", "", Some(&a), Some(&b), Some(&s)),
            VisibleList::Tab(Tab::A, a.as_slice())
        );
        assert_eq!(
            select("b", "", Some(&a), Some(&b), Some(&s)),
            VisibleList::Tab(Tab::B, b.as_slice())
        );
    }

    #[test]
    fn non_empty_query_wins_over_every_tab() {
        let a = vec![post(1)];
        let b = vec![post(2)];
        let s = vec![post(9)];

        for tab in ["a", "b", "c", ""] {
            assert_eq!(
                select(tab, "foo", Some(&a), Some(&b), Some(&s)),
                VisibleList::Search(s.as_slice())
            );
        }
    }

    #[test]
    fn whitespace_query_still_counts_as_a_query() {
        let s = vec![post(9)];
        assert_eq!(
            select("a", " ", None, None, Some(&s)),
            VisibleList::Search(s.as_slice())
        );
    }

    #[test]
    fn unknown_tab_with_empty_query_selects_nothing() {
        let a = vec![post(1)];
        let selection = select("c", "", Some(&a), None, None);
        assert_eq!(selection, VisibleList::None);
        assert!(selection.posts().is_empty());
    }

    #[test]
    fn absent_collections_behave_as_empty() {
        assert!(select("a", "", None, None, None).posts().is_empty());
        assert!(select("b", "", None, None, None).posts().is_empty());
        assert!(select("a", "q", None, None, None).posts().is_empty());
    }

    #[test]
    fn selection_returns_the_input_collection_unchanged() {
        let a = vec![post(3), post(1), post(2)];
        let selection = select("a", "", Some(&a), None, None);
        assert_eq!(selection.posts(), a.as_slice());
    }
}
