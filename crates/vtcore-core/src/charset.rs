//! G0-G3 charset slots, GL/GR designation, and single-shift handling
//! (component B). Generalizes the teacher's hardcoded ASCII-only rendering
//! with the full four-slot designation model plus SS2/SS3 one-shot shifts.

use vtcore_types::{CharsetSlot, CharsetTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetState {
    slots: [CharsetTable; 4],
    gl: CharsetSlot,
    /// SS2/SS3 apply to exactly the next printable cluster, then clear.
    single_shift: Option<CharsetSlot>,
}

impl CharsetState {
    pub fn new() -> Self {
        Self {
            slots: [CharsetTable::Ascii; 4],
            gl: CharsetSlot::G0,
            single_shift: None,
        }
    }

    pub fn designate(&mut self, slot: CharsetSlot, table: CharsetTable) {
        self.slots[slot_index(slot)] = table;
    }

    pub fn invoke_gl(&mut self, slot: CharsetSlot) {
        self.gl = slot;
    }

    pub fn gl(&self) -> CharsetSlot {
        self.gl
    }

    pub fn single_shift(&mut self, slot: CharsetSlot) {
        self.single_shift = Some(slot);
    }

    /// Translate one printable character through the currently active
    /// table, consuming a pending single shift if one is armed.
    pub fn translate(&mut self, ch: char) -> char {
        let slot = self.single_shift.take().unwrap_or(self.gl);
        self.slots[slot_index(slot)].translate(ch)
    }
}

impl Default for CharsetState {
    fn default() -> Self {
        Self::new()
    }
}

fn slot_index(slot: CharsetSlot) -> usize {
    match slot {
        CharsetSlot::G0 => 0,
        CharsetSlot::G1 => 1,
        CharsetSlot::G2 => 2,
        CharsetSlot::G3 => 3,
    }
}

/// Horizontal tab stops over a fixed column count (§4.D). Defaults to every
/// 8th column, matching VT100/xterm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStops {
    stops: Vec<bool>,
}

impl TabStops {
    pub fn new(cols: u16) -> Self {
        let mut stops = vec![false; cols as usize];
        let mut col = 0usize;
        while col < stops.len() {
            stops[col] = true;
            col += 8;
        }
        Self { stops }
    }

    pub fn resize(&mut self, cols: u16) {
        let cols = cols as usize;
        if cols > self.stops.len() {
            self.stops.resize(cols, false);
        } else {
            self.stops.truncate(cols);
        }
    }

    pub fn set(&mut self, col: u16) {
        if let Some(slot) = self.stops.get_mut(col as usize) {
            *slot = true;
        }
    }

    pub fn clear(&mut self, col: u16) {
        if let Some(slot) = self.stops.get_mut(col as usize) {
            *slot = false;
        }
    }

    pub fn clear_all(&mut self) {
        self.stops.iter_mut().for_each(|s| *s = false);
    }

    /// Next tab stop strictly after `col`, or the last column if none.
    pub fn next(&self, col: u16) -> u16 {
        let start = col as usize + 1;
        self.stops[start.min(self.stops.len())..]
            .iter()
            .position(|&set| set)
            .map(|offset| (start + offset) as u16)
            .unwrap_or_else(|| self.stops.len().saturating_sub(1) as u16)
    }

    /// Previous tab stop strictly before `col`, or column 0 if none.
    pub fn previous(&self, col: u16) -> u16 {
        let col = col as usize;
        self.stops[..col.min(self.stops.len())]
            .iter()
            .rposition(|&set| set)
            .map(|c| c as u16)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_stops_every_eighth_column() {
        let stops = TabStops::new(40);
        assert_eq!(stops.next(0), 8);
        assert_eq!(stops.next(8), 16);
    }

    #[test]
    fn clearing_a_stop_skips_it() {
        let mut stops = TabStops::new(40);
        stops.clear(8);
        assert_eq!(stops.next(0), 16);
    }

    #[test]
    fn single_shift_applies_once_then_reverts() {
        let mut charset = CharsetState::new();
        charset.designate(CharsetSlot::G1, CharsetTable::DecSpecialGraphics);
        charset.single_shift(CharsetSlot::G1);
        assert_eq!(charset.translate('q'), '\u{2500}');
        assert_eq!(charset.translate('q'), 'q');
    }
}
