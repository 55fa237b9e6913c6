//! Styling configuration for the table, search bar, and overlay.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` flag or any value in the
/// `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and the environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Whether colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for every widget in the application.
#[derive(Debug, Clone)]
pub struct UiStyles {
    /// Top header bar.
    pub header: Style,
    /// Table column headers.
    pub table_header: Style,
    /// The row under the table cursor.
    pub row_cursor: Style,
    /// Dim hint text (status bar, placeholders).
    pub hint: Style,
    /// Error messages.
    pub error: Style,
    /// Section titles inside the overlay.
    pub section: Style,
    /// The post title under the posts cursor.
    pub post_cursor: Style,
    /// The echoed search term and clear affordance.
    pub search_active: Style,
}

impl UiStyles {
    /// Default color scheme, honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Build styles for an explicit color configuration. With colors
    /// disabled everything renders with default terminal styling except
    /// the cursor rows, which keep REVERSED so navigation stays visible.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                table_header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                row_cursor: Style::default().add_modifier(Modifier::REVERSED),
                hint: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                section: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                post_cursor: Style::default().add_modifier(Modifier::REVERSED),
                search_active: Style::default().fg(Color::Green),
            }
        } else {
            Self {
                header: Style::default(),
                table_header: Style::default(),
                row_cursor: Style::default().add_modifier(Modifier::REVERSED),
                hint: Style::default(),
                error: Style::default(),
                section: Style::default(),
                post_cursor: Style::default().add_modifier(Modifier::REVERSED),
                search_active: Style::default(),
            }
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::new()
    }
}
