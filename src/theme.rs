//! Theme tokens and the mode → theme resolver.
//!
//! ARCHITECTURE
//! ============
//! Components style themselves through the CSS custom properties emitted by
//! [`Theme::css_variables`] on the app root, never by branching on
//! [`ThemeMode`]. Adding a mode only touches [`resolve`] and a new constant.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size_px: u16,
}

/// Concrete style tokens for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    /// Base spacing unit; layout uses multiples of it.
    pub spacing_px: u16,
    pub radius_px: u16,
}

const TYPOGRAPHY: Typography = Typography {
    font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
    font_size_px: 14,
};

pub const LIGHT_THEME: Theme = Theme {
    mode: ThemeMode::Light,
    palette: Palette {
        primary: "#1976d2",
        secondary: "#9c27b0",
        error: "#d32f2f",
        warning: "#ed6c02",
        success: "#2e7d32",
        background: "#ffffff",
        paper: "#ffffff",
        text_primary: "rgba(0, 0, 0, 0.87)",
        text_secondary: "rgba(0, 0, 0, 0.6)",
        divider: "rgba(0, 0, 0, 0.12)",
    },
    typography: TYPOGRAPHY,
    spacing_px: 8,
    radius_px: 4,
};

pub const DARK_THEME: Theme = Theme {
    mode: ThemeMode::Dark,
    palette: Palette {
        primary: "#90caf9",
        secondary: "#ce93d8",
        error: "#f44336",
        warning: "#ffa726",
        success: "#66bb6a",
        background: "#121212",
        paper: "#1e1e1e",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.7)",
        divider: "rgba(255, 255, 255, 0.12)",
    },
    typography: TYPOGRAPHY,
    spacing_px: 8,
    radius_px: 4,
};

/// Theme for `mode`. Pure; both themes are constants.
pub fn resolve(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => &LIGHT_THEME,
        ThemeMode::Dark => &DARK_THEME,
    }
}

impl Theme {
    /// `factor` spacing units as a CSS length.
    pub fn spacing(&self, factor: u16) -> String {
        format!("{}px", self.spacing_px * factor)
    }

    /// Inline style declaring every token as a CSS custom property.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let vars: [(&str, String); 15] = [
            ("color-scheme", self.mode.as_str().to_owned()),
            ("--color-primary", p.primary.to_owned()),
            ("--color-secondary", p.secondary.to_owned()),
            ("--color-error", p.error.to_owned()),
            ("--color-warning", p.warning.to_owned()),
            ("--color-success", p.success.to_owned()),
            ("--color-background", p.background.to_owned()),
            ("--color-paper", p.paper.to_owned()),
            ("--color-text", p.text_primary.to_owned()),
            ("--color-text-secondary", p.text_secondary.to_owned()),
            ("--color-divider", p.divider.to_owned()),
            ("--font-family", self.typography.font_family.to_owned()),
            ("--font-size", format!("{}px", self.typography.font_size_px)),
            ("--spacing", self.spacing(1)),
            ("--radius", format!("{}px", self.radius_px)),
        ];
        vars.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
