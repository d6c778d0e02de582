//! Cursor & saved-cursor state (component D). Generalizes
//! `phosphor_core::terminal::cursor::Cursor` with a pending-wrap flag and
//! two independent saved-cursor slots (DECSC/DECRC vs. 1049 alternate-screen
//! entry), per §3/§4.D.

use vtcore_types::{CharsetSlot, Position};

/// Everything DECSC/DECRC and alternate-screen entry must snapshot: position,
/// active charset slot, and origin-mode flag (§3 "Saved Cursor"). Style is
/// saved by the executor alongside this, since `Cursor` doesn't own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub position: Position,
    pub charset_slot: CharsetSlot,
    pub origin_mode: bool,
    pub pending_wrap: bool,
}

#[derive(Debug, Clone)]
pub struct Cursor {
    position: Position,
    visible: bool,
    /// Set when a glyph was written in the last column; the next printable
    /// defers wrapping until it is actually emitted (xterm semantics, §3).
    pending_wrap: bool,
    decsc_slot: Option<SavedCursor>,
    alt_screen_slot: Option<SavedCursor>,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            position: Position::new(0, 0),
            visible: true,
            pending_wrap: false,
            decsc_slot: None,
            alt_screen_slot: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
        self.pending_wrap = false;
    }

    pub fn set_row(&mut self, row: u16) {
        self.position.row = row;
        self.pending_wrap = false;
    }

    pub fn set_col(&mut self, col: u16) {
        self.position.col = col;
        self.pending_wrap = false;
    }

    pub fn move_up(&mut self, n: u16) {
        self.position.row = self.position.row.saturating_sub(n);
        self.pending_wrap = false;
    }

    pub fn move_down(&mut self, n: u16) {
        self.position.row = self.position.row.saturating_add(n);
        self.pending_wrap = false;
    }

    pub fn move_left(&mut self, n: u16) {
        self.position.col = self.position.col.saturating_sub(n);
        self.pending_wrap = false;
    }

    pub fn move_right(&mut self, n: u16) {
        self.position.col = self.position.col.saturating_add(n);
        self.pending_wrap = false;
    }

    pub fn pending_wrap(&self) -> bool {
        self.pending_wrap
    }

    pub fn set_pending_wrap(&mut self, pending: bool) {
        self.pending_wrap = pending;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn save_decsc(&mut self, charset_slot: CharsetSlot, origin_mode: bool) {
        self.decsc_slot = Some(SavedCursor {
            position: self.position,
            charset_slot,
            origin_mode,
            pending_wrap: self.pending_wrap,
        });
    }

    /// Returns the saved state so the executor can restore charset slot and
    /// origin mode alongside the cursor's own fields.
    pub fn restore_decsc(&mut self) -> Option<SavedCursor> {
        let saved = self.decsc_slot?;
        self.position = saved.position;
        self.pending_wrap = saved.pending_wrap;
        Some(saved)
    }

    pub fn save_alt_screen(&mut self, charset_slot: CharsetSlot, origin_mode: bool) {
        self.alt_screen_slot = Some(SavedCursor {
            position: self.position,
            charset_slot,
            origin_mode,
            pending_wrap: self.pending_wrap,
        });
    }

    pub fn restore_alt_screen(&mut self) -> Option<SavedCursor> {
        let saved = self.alt_screen_slot?;
        self.position = saved.position;
        self.pending_wrap = saved.pending_wrap;
        Some(saved)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_clears_pending_wrap() {
        let mut cursor = Cursor::new();
        cursor.set_pending_wrap(true);
        cursor.move_left(1);
        assert!(!cursor.pending_wrap());
    }

    #[test]
    fn decsc_round_trips_position_and_charset() {
        let mut cursor = Cursor::new();
        cursor.set_position(Position::new(5, 10));
        cursor.save_decsc(CharsetSlot::G1, true);
        cursor.set_position(Position::new(0, 0));
        let saved = cursor.restore_decsc().unwrap();
        assert_eq!(cursor.position(), Position::new(5, 10));
        assert_eq!(saved.charset_slot, CharsetSlot::G1);
        assert!(saved.origin_mode);
    }

    #[test]
    fn alt_screen_slot_is_independent_of_decsc() {
        let mut cursor = Cursor::new();
        cursor.set_position(Position::new(1, 1));
        cursor.save_decsc(CharsetSlot::G0, false);
        cursor.set_position(Position::new(9, 9));
        cursor.save_alt_screen(CharsetSlot::G0, false);
        cursor.set_position(Position::new(0, 0));
        cursor.restore_alt_screen();
        assert_eq!(cursor.position(), Position::new(9, 9));
    }
}
