use crate::types::Tab;

/// Caption rendered on one tab selector entry.
#[derive(Debug, Clone)]
pub struct TabLabels {
    pub tab: Tab,
    pub caption: String,
}

impl TabLabels {
    /// Build a [`TabLabels`] from a tab and its caption.
    #[must_use]
    pub fn new(tab: Tab, caption: impl Into<String>) -> Self {
        Self {
            tab,
            caption: caption.into(),
        }
    }
}

/// Text used by the pane when rendering the input row and tab captions.
#[derive(Debug, Clone)]
pub struct UiLabels {
    /// Placeholder shown in the search input while the query is empty.
    pub placeholder: String,
    tabs: Vec<TabLabels>,
}

impl Default for UiLabels {
    fn default() -> Self {
        let mut labels = Self {
            placeholder: "검색어를 입력하세요".to_string(),
            tabs: Vec::new(),
        };
        labels.register_tab(TabLabels::new(Tab::A, "A Posts"));
        labels.register_tab(TabLabels::new(Tab::B, "B Posts"));
        labels
    }
}

impl UiLabels {
    /// Register a tab caption with this configuration.
    pub fn register_tab(&mut self, tab: TabLabels) {
        self.tabs.push(tab);
    }

    /// Return all registered tabs in the order they were added.
    #[must_use]
    pub fn tabs(&self) -> &[TabLabels] {
        &self.tabs
    }

    /// Return the caption for a tab, falling back to its identifier when the
    /// tab was never registered.
    #[must_use]
    pub fn caption(&self, tab: Tab) -> &str {
        self.tabs
            .iter()
            .find(|entry| entry.tab == tab)
            .map(|entry| entry.caption.as_str())
            .unwrap_or(tab.as_str())
    }
}
