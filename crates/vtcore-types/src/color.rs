use serde::{Deserialize, Serialize};

/// A terminal color: the default (inherits the palette's fg/bg), one of the
/// 256 indexed palette slots, or a direct truecolor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Default,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Map a 0..=15 ANSI color index (SGR 30-37/40-47/90-97/100-107) to an
    /// indexed color.
    pub fn from_ansi(index: u8) -> Self {
        Color::Indexed(index)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

/// The fixed xterm 256-color palette (0..=15 basic, 16..=231 a 6x6x6 color
/// cube, 232..=255 grayscale ramp), used to resolve `Color::Indexed` to RGB
/// when a renderer needs concrete pixels. Indices 0..=15 are configurable per
/// `Palette` instance; 16..=255 always follow the fixed xterm scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    basic: [(u8, u8, u8); 16],
}

/// The default xterm 16-color basic palette.
const DEFAULT_BASIC: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

impl Palette {
    pub fn resolve(&self, index: u8) -> (u8, u8, u8) {
        match index {
            0..=15 => self.basic[index as usize],
            16..=231 => {
                let i = index - 16;
                let r = i / 36;
                let g = (i % 36) / 6;
                let b = i % 6;
                (cube_component(r), cube_component(g), cube_component(b))
            }
            232..=255 => {
                let level = 8 + (index - 232) as u16 * 10;
                (level as u8, level as u8, level as u8)
            }
        }
    }

    pub fn set_basic(&mut self, index: u8, rgb: (u8, u8, u8)) {
        if (index as usize) < self.basic.len() {
            self.basic[index as usize] = rgb;
        }
    }

    pub fn reset_basic(&mut self, index: u8) {
        if (index as usize) < self.basic.len() {
            self.basic[index as usize] = DEFAULT_BASIC[index as usize];
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { basic: DEFAULT_BASIC }
    }
}

fn cube_component(level: u8) -> u8 {
    if level == 0 { 0 } else { 55 + level * 40 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_corners() {
        let palette = Palette::default();
        assert_eq!(palette.resolve(16), (0, 0, 0));
        assert_eq!(palette.resolve(231), (255, 255, 255));
    }

    #[test]
    fn grayscale_ramp_ends() {
        let palette = Palette::default();
        assert_eq!(palette.resolve(232), (8, 8, 8));
        assert_eq!(palette.resolve(255), (238, 238, 238));
    }

    #[test]
    fn basic_palette_is_configurable() {
        let mut palette = Palette::default();
        palette.set_basic(1, (255, 0, 0));
        assert_eq!(palette.resolve(1), (255, 0, 0));
        palette.reset_basic(1);
        assert_eq!(palette.resolve(1), (205, 0, 0));
    }
}
