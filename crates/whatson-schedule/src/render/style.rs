//! Styling capability for console renderers.
//!
//! One method per semantic field. Implementations emphasise text without
//! changing its content, so layout and tests see the same characters
//! either way.

use colored::Colorize;

/// Per-field styling hooks consumed by `TextRenderer`.
pub trait Styler {
    /// Air-time cell.
    fn time(&self, text: &str) -> String;
    /// Show-name cell.
    fn name(&self, text: &str) -> String;
    /// Episode-tag cell.
    fn episode(&self, text: &str) -> String;
    /// Network name.
    fn network(&self, text: &str) -> String;
    /// Show classification.
    fn show_type(&self, text: &str) -> String;
    /// Notices such as the empty-result line.
    fn notice(&self, text: &str) -> String;
}

/// Identity styler; keeps pipeline output deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn time(&self, text: &str) -> String {
        String::from(text)
    }

    fn name(&self, text: &str) -> String {
        String::from(text)
    }

    fn episode(&self, text: &str) -> String {
        String::from(text)
    }

    fn network(&self, text: &str) -> String {
        String::from(text)
    }

    fn show_type(&self, text: &str) -> String {
        String::from(text)
    }

    fn notice(&self, text: &str) -> String {
        String::from(text)
    }
}

/// ANSI styler backed by the `colored` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn time(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn name(&self, text: &str) -> String {
        text.bright_white().bold().to_string()
    }

    fn episode(&self, text: &str) -> String {
        text.cyan().to_string()
    }

    fn network(&self, text: &str) -> String {
        text.green().bold().to_string()
    }

    fn show_type(&self, text: &str) -> String {
        text.bright_black().to_string()
    }

    fn notice(&self, text: &str) -> String {
        text.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styler_is_identity() {
        // Arrange
        let styler = PlainStyler;

        // Act & Assert
        assert_eq!(styler.time("20:00"), "20:00");
        assert_eq!(styler.name("NCIS"), "NCIS");
        assert_eq!(styler.network("CBS"), "CBS");
        assert_eq!(styler.notice("nothing on"), "nothing on");
    }

    #[test]
    fn test_ansi_styler_preserves_content() {
        // Arrange
        let styler = AnsiStyler;

        // Act & Assert: emphasis only, the text itself survives
        assert!(styler.time("20:00").contains("20:00"));
        assert!(styler.name("NCIS").contains("NCIS"));
        assert!(styler.network("CBS").contains("CBS"));
        assert!(styler.show_type("Scripted").contains("Scripted"));
    }
}
