//! Consistent styling for terminal output, via owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Configuration")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Labels/keys (e.g., "discord.token")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Primary values
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Secondary info such as where a setting came from
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }
}
