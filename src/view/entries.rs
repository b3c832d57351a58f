use crate::types::Post;

/// A display-ready, navigable representation of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Stable render key, the post id.
    pub key: u64,
    /// Navigation target for the detail view. The pane only emits the
    /// target; navigating is the host's job.
    pub href: String,
    /// Heading text, the id-prefixed title.
    pub title: String,
    /// Full post content. Clamping to a fixed number of lines happens at
    /// render time only.
    pub body: String,
}

impl Entry {
    /// Build the display entry for a post.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            key: post.id,
            href: detail_href(post),
            title: format!("{}. {}", post.id, post.title),
            body: post.content.clone(),
        }
    }
}

/// Navigation target for a post's detail view.
///
/// The kind and id are taken verbatim from the post; any escaping is left to
/// the host's navigation layer.
#[must_use]
pub fn detail_href(post: &Post) -> String {
    format!("/detail/{}?id={}", post.kind, post.id)
}

/// Map posts to display entries, preserving input order.
#[must_use]
pub fn entries(posts: &[Post]) -> Vec<Entry> {
    posts.iter().map(Entry::from_post).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_maps_to_no_entries() {
        assert!(entries(&[]).is_empty());
    }

    #[test]
    fn href_encodes_kind_and_id() {
        let post = Post::new(1, "T", "C", "x");
        let mapped = entries(std::slice::from_ref(&post));
        assert_eq!(mapped[0].href, "/detail/x?id=1");
        assert_eq!(mapped[0].href, detail_href(&post));
    }

    #[test]
    fn title_is_prefixed_with_the_id() {
        let entry = Entry::from_post(&Post::new(12, "Hello", "", "a"));
        assert_eq!(entry.title, "12. Hello");
    }

    #[test]
    fn body_passes_through_untruncated() {
        let long = "line\n".repeat(40);
        let entry = Entry::from_post(&Post::new(1, "T", long.clone(), "a"));
        assert_eq!(entry.body, long);
    }

    #[test]
    fn order_and_keys_follow_the_input() {
        let posts = vec![
            Post::new(5, "five", "", "a"),
            Post::new(2, "two", "", "a"),
            Post::new(9, "nine", "", "b"),
        ];
        let keys: Vec<u64> = entries(&posts).iter().map(|entry| entry.key).collect();
        assert_eq!(keys, vec![5, 2, 9]);
    }
}
