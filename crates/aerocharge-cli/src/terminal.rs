//! Terminal capability detection and number formatting.
//!
//! Colors are plain ANSI escape sequences; everything degrades to empty
//! strings when `NO_COLOR` is set or `TERM=dumb`.

/// ANSI escape codes used by the text renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse yellow for the WARN badge.
    pub const TAG_WARN: &str = "\x1b[1;7;33m";

    /// Bright bold white for section headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text (notes, footers).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for labels.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for computed metrics.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for the banner and default markers.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Yellow for advisory text.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_warn: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub label: &'static str,
    pub metric: &'static str,
    pub accent: &'static str,
    pub advisory: &'static str,
}

impl ColorPalette {
    /// Palette with ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_warn: colors::TAG_WARN,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            label: colors::CYAN,
            metric: colors::GREEN,
            accent: colors::ORANGE,
            advisory: colors::YELLOW,
        }
    }

    /// Palette with every code empty.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_warn: "",
            heading: "",
            muted: "",
            label: "",
            metric: "",
            accent: "",
            advisory: "",
        }
    }

    /// `colored()` when [`supports_color`] holds, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI colors should be emitted.
///
/// Honors `NO_COLOR` (<https://no-color.org/>) and `TERM=dumb`.
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

/// Whether the locale advertises UTF-8 through `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

/// Format an integer with comma thousand separators.
///
/// ```
/// # use aerocharge_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(10_000), "10,000");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a value with a fixed number of decimals and grouped whole digits.
///
/// Non-finite values are passed through unchanged.
///
/// ```
/// # use aerocharge_cli::terminal::format_decimal;
/// assert_eq!(format_decimal(59.6774, 2), "59.68");
/// assert_eq!(format_decimal(12_345.0, 2), "12,345.00");
/// ```
#[must_use]
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };
    let grouped = digits
        .parse::<u64>()
        .map(format_with_separators)
        .unwrap_or_else(|_| digits.to_string());

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        result
    }

    #[test]
    fn separators_group_by_thousands() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(1_000), "1,000");
        assert_eq!(format_with_separators(123_456), "123,456");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
        assert_eq!(
            format_with_separators(u64::MAX),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn decimals_round_and_group() {
        assert_eq!(format_decimal(0.0625, 2), "0.06");
        assert_eq!(format_decimal(6.8125, 2), "6.81");
        assert_eq!(format_decimal(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_decimal(42.0, 0), "42");
        assert_eq!(format_decimal(-1_500.5, 1), "-1,500.5");
    }

    #[test]
    fn decimals_pass_through_non_finite() {
        assert_eq!(format_decimal(f64::INFINITY, 2), "inf");
        assert_eq!(format_decimal(f64::NAN, 2), "NaN");
    }

    #[test]
    fn plain_palette_is_empty() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.tag_warn.is_empty());
        assert!(p.metric.is_empty());

        let c = ColorPalette::colored();
        assert!(!c.reset.is_empty());
        assert!(!c.tag_warn.is_empty());
    }

    #[test]
    fn no_color_disables_colors() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn dumb_terminal_disables_colors() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn regular_terminal_supports_colors() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || assert!(supports_color()),
        );
    }

    #[test]
    fn utf8_locale_enables_unicode() {
        with_env_vars(&[("LANG", Some("en_GB.UTF-8")), ("LC_ALL", None)], || {
            assert!(supports_unicode());
        });
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert!(!supports_unicode());
        });
    }
}
