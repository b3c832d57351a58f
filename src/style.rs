use ratatui::style::{Color, Modifier, Style};

/// Color palette for the pane, lifted from the host application's constants.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for the focused border, active tab, and id prefix.
    pub accent: Color,
    /// Border color for unfocused chrome.
    pub line: Color,
    /// Primary text color.
    pub text: Color,
    /// Muted color for placeholders and inactive tabs.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(59, 131, 246),
            line: Color::Rgb(225, 225, 225),
            text: Color::Rgb(33, 33, 33),
            muted: Color::Rgb(150, 150, 150),
        }
    }
}

impl Theme {
    /// Border style for the input row; the accent color signals focus.
    #[must_use]
    pub fn input_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.accent)
        } else {
            Style::new().fg(self.line)
        }
    }

    /// Style for the input placeholder text.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Style for the typed query text.
    #[must_use]
    pub fn query_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    /// Style for a tab caption.
    #[must_use]
    pub fn tab_style(&self, active: bool) -> Style {
        let style = Style::new().add_modifier(Modifier::BOLD);
        if active {
            style.fg(self.accent)
        } else {
            style.fg(self.muted)
        }
    }

    /// Style for the bold id prefix of an entry heading.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the rest of an entry heading.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    /// Style for clamped entry body text.
    #[must_use]
    pub fn body_style(&self) -> Style {
        Style::new().fg(self.muted)
    }
}
