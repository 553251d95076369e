//! ANSI styling for the `rich` route report.

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD_WHITE: &str = "\x1b[1;97m";
const GRAY: &str = "\x1b[90m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Escape sequences used by the route report. Every field is empty when
/// colour is off, so renderers can interpolate them unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    /// Location names.
    pub white_bold: &'static str,
    /// Hop markers and the travel hint.
    pub gray: &'static str,
    /// Headings.
    pub cyan: &'static str,
    /// Distance and travel time labels.
    pub green: &'static str,
    /// Danger total at or below the high-danger threshold.
    pub yellow: &'static str,
    /// Danger total above the threshold, and locked hops.
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: RESET,
            white_bold: BOLD_WHITE,
            gray: GRAY,
            cyan: CYAN,
            green: GREEN,
            yellow: YELLOW,
            red: RED,
        }
    }

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

    /// Coloured when stdout is a terminal that accepts escapes.
    #[must_use]
    pub fn detect() -> Self {
        let allowed = color_allowed(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("TERM").ok().as_deref(),
        );
        if allowed && std::io::stdout().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// `NO_COLOR` (any value) and `TERM=dumb` both switch colour off.
fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
