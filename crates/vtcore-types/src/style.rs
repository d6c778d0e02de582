use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::Color;

bitflags! {
    /// SGR attribute toggles, packed into a bitset for cheap per-cell storage
    /// and comparison (§9: dynamic maps replaced with closed bitsets).
    ///
    /// Serialize/Deserialize come from bitflags's own `serde` feature.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: u16 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const BLINK_SLOW    = 1 << 3;
        const BLINK_FAST    = 1 << 4;
        const REVERSE       = 1 << 5;
        const HIDDEN        = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
        /// Set whenever underline is active, independent of `UnderlineStyle`;
        /// kept alongside the style so "no underline" (24) can clear both in
        /// one flag test.
        const UNDERLINE     = 1 << 8;
    }
}

/// Underline rendering variants recognized via SGR `4` and its colon
/// sub-parameter form `4:n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    Double,
    Curly,
    Dotted,
    Dashed,
}

impl UnderlineStyle {
    pub fn from_sub_param(n: u16) -> Self {
        match n {
            0 => UnderlineStyle::None,
            1 => UnderlineStyle::Single,
            2 => UnderlineStyle::Double,
            3 => UnderlineStyle::Curly,
            4 => UnderlineStyle::Dotted,
            5 => UnderlineStyle::Dashed,
            _ => UnderlineStyle::Single,
        }
    }
}

/// Identifier for an OSC 8 hyperlink, interned by the core's hyperlink table.
pub type HyperlinkId = u32;

/// The full styling applied to a cell: colors, attribute flags, underline
/// variant/color, and an optional hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub underline_color: Option<Color>,
    pub flags: AttributeFlags,
    pub underline: UnderlineStyle,
    pub hyperlink: Option<HyperlinkId>,
}

impl Style {
    pub fn reset(&mut self) {
        *self = Style::default();
    }

    pub fn set_flag(&mut self, flag: AttributeFlags, enabled: bool) {
        self.flags.set(flag, enabled);
    }

    pub fn set_underline(&mut self, style: UnderlineStyle) {
        self.underline = style;
        self.flags.set(AttributeFlags::UNDERLINE, style != UnderlineStyle::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_colors_and_flags() {
        let mut style = Style {
            fg: Color::Indexed(1),
            flags: AttributeFlags::BOLD,
            ..Default::default()
        };
        style.reset();
        assert_eq!(style, Style::default());
    }

    #[test]
    fn set_underline_toggles_flag() {
        let mut style = Style::default();
        style.set_underline(UnderlineStyle::Curly);
        assert!(style.flags.contains(AttributeFlags::UNDERLINE));
        style.set_underline(UnderlineStyle::None);
        assert!(!style.flags.contains(AttributeFlags::UNDERLINE));
    }
}
