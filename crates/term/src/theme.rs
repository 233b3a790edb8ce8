//! Light/dark palettes for the game view.
//!
//! Plain data; the view never branches on the theme kind, it just reads
//! colors.

use crate::fb::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

/// Complete color palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    /// Screen background outside the board
    pub screen_bg: Rgb,
    /// Play-area background
    pub board_bg: Rgb,
    /// Grid dots on empty cells
    pub grid_dot: Rgb,
    pub border: Rgb,
    pub snake_head: Rgb,
    pub snake_body: Rgb,
    pub food: Rgb,
    /// Side-panel labels (SCORE, LENGTH, ...)
    pub label: Rgb,
    /// Side-panel values
    pub value: Rgb,
    pub overlay_fg: Rgb,
    pub overlay_bg: Rgb,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            screen_bg: Rgb::new(0, 0, 0),
            board_bg: Rgb::new(30, 30, 40),
            grid_dot: Rgb::new(90, 90, 100),
            border: Rgb::new(200, 200, 200),
            snake_head: Rgb::new(120, 255, 140),
            snake_body: Rgb::new(100, 220, 120),
            food: Rgb::new(220, 80, 80),
            label: Rgb::new(220, 220, 220),
            value: Rgb::new(200, 200, 200),
            overlay_fg: Rgb::new(255, 255, 255),
            overlay_bg: Rgb::new(0, 0, 0),
        }
    }

    pub const fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            screen_bg: Rgb::new(245, 245, 240),
            board_bg: Rgb::new(228, 228, 220),
            grid_dot: Rgb::new(180, 180, 172),
            border: Rgb::new(60, 60, 60),
            snake_head: Rgb::new(20, 120, 40),
            snake_body: Rgb::new(40, 150, 60),
            food: Rgb::new(190, 40, 40),
            label: Rgb::new(40, 40, 40),
            value: Rgb::new(70, 70, 70),
            overlay_fg: Rgb::new(20, 20, 20),
            overlay_bg: Rgb::new(255, 255, 255),
        }
    }

    /// The other palette.
    pub fn toggle(self) -> Self {
        match self.kind {
            ThemeKind::Dark => Self::light(),
            ThemeKind::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
