//! Shared theme tokens and accessibility profile hooks for screen rendering.

#![allow(missing_docs)]

use std::env;

use ratatui::style::{Color, Modifier, Style};

/// Contrast profile used by palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Standard,
    High,
}

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by theme/layout primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub contrast: ContrastMode,
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            contrast: ContrastMode::Standard,
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn new(high_contrast: bool, no_color: bool) -> Self {
        Self {
            contrast: if high_contrast {
                ContrastMode::High
            } else {
                ContrastMode::Standard
            },
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    /// Honor the `NO_COLOR` convention on top of an explicit flag.
    #[must_use]
    pub fn from_environment(high_contrast: bool, no_color_flag: bool) -> Self {
        let no_color = no_color_flag || env::var_os("NO_COLOR").is_some();
        Self::new(high_contrast, no_color)
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }
}

/// Shared semantic palette for the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bar_fg: Color,
    pub bar_bg: Color,
    pub border: Color,
    pub name: Color,
    pub muted: Color,
    pub accent: Color,
}

impl ThemePalette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bar_fg: Color::Black,
            bar_bg: Color::Cyan,
            border: Color::DarkGray,
            name: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            bar_fg: Color::Black,
            bar_bg: Color::LightCyan,
            border: Color::White,
            name: Color::White,
            muted: Color::White,
            accent: Color::LightCyan,
        }
    }

    #[must_use]
    pub const fn from_contrast(mode: ContrastMode) -> Self {
        match mode {
            ContrastMode::Standard => Self::standard(),
            ContrastMode::High => Self::high_contrast(),
        }
    }
}

/// Shared spacing scale; compacts on narrow terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingScale {
    /// Horizontal margin around the card list.
    pub list_margin: u16,
    /// Left padding inside a card between frame and content.
    pub card_padding: u16,
}

impl SpacingScale {
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            list_margin: 0,
            card_padding: 1,
        }
    }

    #[must_use]
    pub const fn comfortable() -> Self {
        Self {
            list_margin: 1,
            card_padding: 2,
        }
    }

    #[must_use]
    pub const fn for_columns(cols: u16) -> Self {
        if cols < 60 {
            Self::compact()
        } else {
            Self::comfortable()
        }
    }
}

/// Full render theme (palette + spacing + accessibility profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accessibility: AccessibilityProfile,
    pub palette: ThemePalette,
    pub spacing: SpacingScale,
}

impl Theme {
    #[must_use]
    pub const fn for_terminal(cols: u16, accessibility: AccessibilityProfile) -> Self {
        Self {
            palette: ThemePalette::from_contrast(accessibility.contrast),
            spacing: SpacingScale::for_columns(cols),
            accessibility,
        }
    }

    /// Top bar: colored background, or reversed video under `NO_COLOR`.
    #[must_use]
    pub fn bar_style(&self) -> Style {
        if self.accessibility.no_color() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
                .fg(self.palette.bar_fg)
                .bg(self.palette.bar_bg)
        }
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        self.fg(self.palette.border)
    }

    #[must_use]
    pub fn name_style(&self) -> Style {
        self.fg(self.palette.name).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        if self.accessibility.no_color() {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(self.palette.muted)
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.fg(self.palette.accent)
    }

    /// "About:" heading inside the expanded block.
    #[must_use]
    pub fn about_style(&self) -> Style {
        self.fg(self.palette.accent).add_modifier(Modifier::BOLD)
    }

    fn fg(&self, color: Color) -> Style {
        if self.accessibility.no_color() {
            Style::default()
        } else {
            Style::default().fg(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_profile_disables_color_mode() {
        let profile = AccessibilityProfile::new(false, true);
        assert!(profile.no_color());
        assert!(!AccessibilityProfile::default().no_color());
    }

    #[test]
    fn spacing_compacts_on_narrow_terminals() {
        let compact = SpacingScale::for_columns(40);
        let wide = SpacingScale::for_columns(120);
        assert!(compact.list_margin < wide.list_margin);
        assert!(compact.card_padding < wide.card_padding);
    }

    #[test]
    fn high_contrast_selects_high_palette() {
        let theme = Theme::for_terminal(80, AccessibilityProfile::new(true, false));
        assert_eq!(theme.palette, ThemePalette::high_contrast());
    }

    #[test]
    fn no_color_styles_carry_no_colors() {
        let theme = Theme::for_terminal(80, AccessibilityProfile::new(false, true));
        assert_eq!(theme.accent_style(), Style::default());
        assert_eq!(theme.border_style(), Style::default());
        assert!(theme.bar_style().add_modifier.contains(Modifier::REVERSED));
    }
}
