use serde::{Deserialize, Serialize};

use crate::cell::Line;
use crate::geometry::{Position, Size};
use crate::style::Style;

/// Cursor shape hint, driven by DECSCUSR; the renderer owns blink timing
/// (§9 — timers/animations are not part of the core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorStyle {
    pub shape: CursorShape,
    pub blinking: bool,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self { shape: CursorShape::Block, blinking: true }
    }
}

/// Cursor state exposed through the public facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    pub position: Position,
    pub visible: bool,
    pub style: CursorStyle,
    pub pending_wrap: bool,
}

/// A read-only, deep-enough view of the terminal suitable for handing to a
/// renderer or the diff engine; remains valid after subsequent `feed()`
/// calls because it owns its data (§3 Ownership).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Size,
    pub lines: Vec<Line>,
    pub cursor: CursorState,
    pub title: String,
    pub bracketed_paste: bool,
    pub mouse_reporting: bool,
    pub alternate_screen_active: bool,
    pub default_style: Style,
}
