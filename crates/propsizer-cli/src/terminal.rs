//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and capability detection for the table
//! output of the CLI. JSON and CSV output never carry escape codes.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bright bold white for headings and engine names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for rules and secondary figures.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for power figures.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for comfortable power margins and the best score.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for thin margins and no-match status lines.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for margins at or below zero.
    pub const RED: &str = "\x1b[31m";
}

/// Margin (percent) at or above which a pairing is shown as comfortable.
pub const COMFORTABLE_MARGIN_PCT: f64 = 20.0;

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for a power margin expressed in percent.
    #[must_use]
    pub fn margin(&self, margin_pct: f64) -> &'static str {
        if margin_pct <= 0.0 {
            self.red
        } else if margin_pct < COMFORTABLE_MARGIN_PCT {
            self.yellow
        } else {
            self.green
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal advertises a UTF-8 locale via `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

/// Horizontal rule character for table headers.
#[must_use]
pub fn rule_char() -> char {
    if supports_unicode() {
        '─'
    } else {
        '-'
    }
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use propsizer_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a USD amount rounded to whole dollars, e.g. `$83,000`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_with_separators(amount.max(0.0).round() as u64))
}
