//! Terminal colors for each display theme.

use crate::preferences::Theme;
use crate::sections::Section;
use ratatui::style::Color;

/// Colors used by every component, resolved from the active [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub secondary: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(2, 6, 23),
                surface: Color::Rgb(15, 23, 42),
                text: Color::Rgb(241, 245, 249),
                muted: Color::Rgb(148, 163, 184),
                accent: Color::Rgb(96, 165, 250),
                secondary: Color::Rgb(167, 139, 250),
                border: Color::Rgb(51, 65, 85),
                highlight_bg: Color::Rgb(30, 58, 138),
                highlight_fg: Color::Rgb(255, 255, 255),
                success: Color::Rgb(52, 211, 153),
                error: Color::Rgb(248, 113, 113),
            },
            Theme::Light => Self {
                background: Color::Rgb(239, 246, 255),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(37, 99, 235),
                secondary: Color::Rgb(124, 58, 237),
                border: Color::Rgb(203, 213, 225),
                highlight_bg: Color::Rgb(219, 234, 254),
                highlight_fg: Color::Rgb(30, 64, 175),
                success: Color::Rgb(5, 150, 105),
                error: Color::Rgb(220, 38, 38),
            },
        }
    }

    /// Badge color for a section heading.
    #[must_use]
    pub const fn section_accent(&self, section: Section) -> Color {
        match section {
            Section::Home | Section::Solutions => self.accent,
            Section::About | Section::Insights => self.secondary,
            Section::Industries => Color::Rgb(99, 102, 241),
            Section::Projects => Color::Rgb(6, 182, 212),
            Section::Careers => Color::Rgb(244, 114, 182),
            Section::Contact => self.success,
        }
    }
}

/// Color for a catalog category tag
#[must_use]
pub fn category_color(tag: &str) -> Color {
    match tag {
        "fintech" => Color::Rgb(59, 130, 246),
        "maritime" => Color::Rgb(99, 102, 241),
        "technology" => Color::Rgb(139, 92, 246),
        "security" => Color::Rgb(239, 68, 68),
        "engineering" => Color::Rgb(14, 165, 233),
        "cloud" => Color::Rgb(168, 85, 247),
        "product" => Color::Rgb(236, 72, 153),
        _ => Color::Rgb(148, 163, 184),
    }
}
