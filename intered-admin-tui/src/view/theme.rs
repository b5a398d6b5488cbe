//! Theme and style definitions

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Theme enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

/// Switches the palette returned by [`colors`].
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// Color scheme of the current theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// Theme colors
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(22, 24, 33),
            fg: Color::Rgb(220, 223, 228),
            border: Color::Rgb(58, 62, 75),
            border_focused: Color::Rgb(94, 129, 244),
            highlight: Color::Rgb(94, 129, 244),
            selected_bg: Color::Rgb(45, 55, 95),
            selected_fg: Color::White,
            success: Color::Rgb(80, 200, 120),
            warning: Color::Rgb(230, 180, 80),
            error: Color::Rgb(235, 100, 100),
            muted: Color::Rgb(120, 125, 140),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 249, 252),
            fg: Color::Rgb(40, 44, 52),
            border: Color::Rgb(205, 208, 215),
            border_focused: Color::Rgb(67, 97, 238),
            highlight: Color::Rgb(67, 97, 238),
            selected_bg: Color::Rgb(220, 228, 255),
            selected_fg: Color::Black,
            success: Color::Rgb(30, 140, 70),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Rgb(200, 50, 60),
            muted: Color::Rgb(125, 130, 140),
        }
    }
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(Color::White)
    }

    /// Key in a shortcut hint
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in a shortcut hint
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// Colored status badge text
    pub fn badge(ok: bool) -> Style {
        let c = colors();
        Style::default().fg(if ok { c.success } else { c.error })
    }
}
