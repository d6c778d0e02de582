use bitflags::bitflags;

/// Addressable mode identifiers, shared between the parser's `SetMode`/
/// `ResetMode` events and the executor's/facade's `mode()` query, covering
/// both ANSI modes (SM/RM) and DEC private modes (DECSET/DECRST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// IRM - insert/replace.
    Insert,
    /// LNM - line feed / new line.
    LineFeedNewLine,
    /// DECCKM - cursor keys send application sequences.
    ApplicationCursor,
    /// DECOM - origin mode, cursor addressing relative to the scroll region.
    OriginMode,
    /// DECAWM - autowrap.
    AutoWrap,
    /// DECTCEM (?25) - cursor visibility.
    CursorVisible,
    /// ?47 - alternate screen, no save/restore of cursor.
    AlternateScreen47,
    /// ?1047 - alternate screen, clears on exit.
    AlternateScreen1047,
    /// ?1049 - alternate screen + save/restore cursor + clear.
    AlternateScreen1049,
    /// ?2004 - bracketed paste.
    BracketedPaste,
    /// ?1004 - focus in/out reporting.
    FocusReporting,
    /// ?1000 - X10 mouse reporting.
    MouseX10,
    /// ?1002 - button-event mouse reporting.
    MouseButtonEvent,
    /// ?1003 - any-event mouse reporting.
    MouseAnyEvent,
    /// ?1006 - SGR extended mouse coordinates.
    MouseSgrCoords,
    /// ?1015 - urxvt extended mouse coordinates.
    MouseUrxvtCoords,
}

bitflags! {
    /// Packed boolean state for every [`Mode`], generalized from a struct of
    /// plain booleans (§9: dynamic state replaced with a closed bitset).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modes: u32 {
        const INSERT               = 1 << 0;
        const LINE_FEED_NEW_LINE    = 1 << 1;
        const APPLICATION_CURSOR   = 1 << 2;
        const ORIGIN               = 1 << 3;
        const AUTO_WRAP            = 1 << 4;
        const CURSOR_VISIBLE       = 1 << 5;
        const ALTERNATE_SCREEN_47  = 1 << 6;
        const ALTERNATE_SCREEN_1047 = 1 << 7;
        const ALTERNATE_SCREEN_1049 = 1 << 8;
        const BRACKETED_PASTE      = 1 << 9;
        const FOCUS_REPORTING      = 1 << 10;
        const MOUSE_X10            = 1 << 11;
        const MOUSE_BUTTON_EVENT   = 1 << 12;
        const MOUSE_ANY_EVENT      = 1 << 13;
        const MOUSE_SGR_COORDS     = 1 << 14;
        const MOUSE_URXVT_COORDS   = 1 << 15;
    }
}

impl Modes {
    /// Defaults matching VT100/xterm conventions: autowrap on, origin off,
    /// cursor visible, everything else off.
    pub fn initial() -> Self {
        Modes::AUTO_WRAP | Modes::CURSOR_VISIBLE
    }

    pub fn bit_for(mode: Mode) -> Modes {
        match mode {
            Mode::Insert => Modes::INSERT,
            Mode::LineFeedNewLine => Modes::LINE_FEED_NEW_LINE,
            Mode::ApplicationCursor => Modes::APPLICATION_CURSOR,
            Mode::OriginMode => Modes::ORIGIN,
            Mode::AutoWrap => Modes::AUTO_WRAP,
            Mode::CursorVisible => Modes::CURSOR_VISIBLE,
            Mode::AlternateScreen47 => Modes::ALTERNATE_SCREEN_47,
            Mode::AlternateScreen1047 => Modes::ALTERNATE_SCREEN_1047,
            Mode::AlternateScreen1049 => Modes::ALTERNATE_SCREEN_1049,
            Mode::BracketedPaste => Modes::BRACKETED_PASTE,
            Mode::FocusReporting => Modes::FOCUS_REPORTING,
            Mode::MouseX10 => Modes::MOUSE_X10,
            Mode::MouseButtonEvent => Modes::MOUSE_BUTTON_EVENT,
            Mode::MouseAnyEvent => Modes::MOUSE_ANY_EVENT,
            Mode::MouseSgrCoords => Modes::MOUSE_SGR_COORDS,
            Mode::MouseUrxvtCoords => Modes::MOUSE_URXVT_COORDS,
        }
    }

    pub fn get(&self, mode: Mode) -> bool {
        self.contains(Self::bit_for(mode))
    }

    pub fn set_mode(&mut self, mode: Mode, enabled: bool) {
        self.set(Self::bit_for(mode), enabled);
    }

    pub fn any_alternate_screen(&self) -> bool {
        self.intersects(
            Modes::ALTERNATE_SCREEN_47 | Modes::ALTERNATE_SCREEN_1047 | Modes::ALTERNATE_SCREEN_1049,
        )
    }

    pub fn any_mouse_reporting(&self) -> bool {
        self.intersects(
            Modes::MOUSE_X10 | Modes::MOUSE_BUTTON_EVENT | Modes::MOUSE_ANY_EVENT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_modes_match_vt100_defaults() {
        let modes = Modes::initial();
        assert!(modes.get(Mode::AutoWrap));
        assert!(modes.get(Mode::CursorVisible));
        assert!(!modes.get(Mode::OriginMode));
        assert!(!modes.get(Mode::Insert));
    }

    #[test]
    fn set_mode_round_trips() {
        let mut modes = Modes::initial();
        modes.set_mode(Mode::OriginMode, true);
        assert!(modes.get(Mode::OriginMode));
        modes.set_mode(Mode::OriginMode, false);
        assert!(!modes.get(Mode::OriginMode));
    }

    #[test]
    fn alternate_screen_union_detects_any_variant() {
        let mut modes = Modes::initial();
        assert!(!modes.any_alternate_screen());
        modes.set_mode(Mode::AlternateScreen1049, true);
        assert!(modes.any_alternate_screen());
    }
}
