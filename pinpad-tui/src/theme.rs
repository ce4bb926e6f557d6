//! Color themes for the code entry control

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Digit text color
    pub fg: Color,
    /// Dimmed foreground (hints, secondary text)
    pub fg_dim: Color,
    /// Background color
    pub bg: Color,
    /// Highlight color (completed code, titles)
    pub highlight: Color,
    /// Underline color of an idle slot
    pub underline: Color,
    /// Underline color of the focused slot
    pub underline_focused: Color,
    /// Caret color
    pub caret: Color,
    /// Accent color (success messages)
    pub accent: Color,
}

impl Theme {
    /// Style for normal text
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style for dimmed text
    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a slot's digit
    pub fn digit(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a slot's underline indicator
    pub fn underline(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.underline_focused)
        } else {
            Style::default().fg(self.underline)
        }
    }

    /// Style for the blinking caret
    pub fn caret(&self) -> Style {
        Style::default().fg(self.caret)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

/// Light gray slots with an orange focus highlight, the control's
/// traditional look
pub const CLASSIC: Theme = Theme {
    name: "classic",
    fg: Color::Rgb(230, 230, 230),            // near white
    fg_dim: Color::Rgb(120, 120, 120),        // mid gray
    bg: Color::Rgb(16, 16, 20),               // near black
    highlight: Color::Rgb(255, 200, 120),     // soft orange
    underline: Color::Rgb(150, 150, 150),     // light gray
    underline_focused: Color::Rgb(255, 150, 40), // orange
    caret: Color::Rgb(170, 170, 170),         // light gray
    accent: Color::Rgb(120, 220, 120),        // green
};

/// Classic phosphor green terminal theme
pub const CRT_GREEN: Theme = Theme {
    name: "phosphor-green",
    fg: Color::Rgb(51, 255, 51),              // phosphor green
    fg_dim: Color::Rgb(25, 128, 25),          // dimmed green
    bg: Color::Rgb(0, 10, 0),                 // near black with green tint
    highlight: Color::Rgb(180, 255, 180),     // bright green
    underline: Color::Rgb(25, 128, 25),       // dimmed green
    underline_focused: Color::Rgb(180, 255, 180), // bright green
    caret: Color::Rgb(100, 255, 100),         // medium green
    accent: Color::Rgb(100, 255, 100),        // medium green
};

/// Neon cyan and magenta
pub const NEON: Theme = Theme {
    name: "neon",
    fg: Color::Rgb(0, 255, 255),              // cyan
    fg_dim: Color::Rgb(0, 128, 128),          // dim cyan
    bg: Color::Rgb(5, 0, 10),                 // dark purple-black
    highlight: Color::Rgb(255, 0, 255),       // magenta
    underline: Color::Rgb(0, 128, 128),       // dim cyan
    underline_focused: Color::Rgb(255, 0, 255), // magenta
    caret: Color::Rgb(0, 255, 128),           // neon green
    accent: Color::Rgb(0, 255, 128),          // neon green
};

impl Default for Theme {
    fn default() -> Self {
        CLASSIC
    }
}
