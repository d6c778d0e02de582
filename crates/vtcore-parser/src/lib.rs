//! ANSI/VT byte stream parser (component F): drives a [`vte::Parser`] state
//! machine and translates its callbacks into the closed [`ParsedEvent`]
//! family, preserving sub-parameter structure (colon-separated SGR/OSC
//! arguments) instead of flattening each parameter to its first value.

use tracing::{debug, trace};
use vte::{Params, Parser, Perform};

use vtcore_types::events::{
    ClipboardPayload, ClipboardSelection, ControlCode, CsiEvent, DcsHook, DeviceStatusQuery,
    EraseMode, EscEvent, OscEvent, ParsedEvent, ParserStats, SgrParam, TabClearMode,
};
use vtcore_types::{CharsetSlot, CharsetTable, Color, Mode, UnderlineStyle};

/// Parameter groups beyond this count are dropped and counted in
/// [`ParserStats::oversized_params`] rather than panicking or truncating
/// silently mid-sequence.
const MAX_PARAM_GROUPS: usize = 32;

/// VTE-based ANSI/VT parser. Owns no terminal state; it only turns bytes
/// into [`ParsedEvent`]s for the command executor to apply.
pub struct VteParser {
    parser: Parser,
    performer: TerminalPerformer,
}

impl VteParser {
    pub fn new() -> Self {
        Self { parser: Parser::new(), performer: TerminalPerformer::new() }
    }

    /// Feed a chunk of bytes and return every event it produced, in order.
    /// Does not retain state across calls beyond the VTE parser's own
    /// partial-sequence buffer, so chunk boundaries never split an event.
    pub fn feed(&mut self, data: &[u8]) -> Vec<ParsedEvent> {
        self.performer.events.clear();
        for &byte in data {
            self.parser.advance(&mut self.performer, byte);
        }
        self.performer.flush_text();
        std::mem::take(&mut self.performer.events)
    }

    pub fn stats(&self) -> ParserStats {
        self.performer.stats
    }
}

impl Default for VteParser {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalPerformer {
    events: Vec<ParsedEvent>,
    current_text: String,
    stats: ParserStats,
}

impl TerminalPerformer {
    fn new() -> Self {
        Self { events: Vec::new(), current_text: String::new(), stats: ParserStats::default() }
    }

    fn flush_text(&mut self) {
        if !self.current_text.is_empty() {
            let text = std::mem::take(&mut self.current_text);
            self.events.push(ParsedEvent::Print(text));
        }
    }

    /// A single numeric parameter, defaulting (per ECMA-48 movement/count
    /// conventions) both when the slot is omitted and when it is an
    /// explicit `0`.
    fn get_param(&self, params: &Params, index: usize, default: u16) -> u16 {
        params.iter().nth(index).map(|p| p[0]).filter(|&v| v > 0).unwrap_or(default)
    }

    /// A numeric parameter with no default substitution, for commands
    /// (margins) where an omitted value and an explicit `0` mean different
    /// things to the executor.
    fn get_raw_param(&self, params: &Params, index: usize) -> Option<u16> {
        params.iter().nth(index).map(|p| p[0]).filter(|&v| v > 0)
    }

    fn groups(&mut self, params: &Params) -> Vec<Vec<u16>> {
        let mut groups: Vec<Vec<u16>> = params.iter().map(|sub| sub.to_vec()).collect();
        if groups.len() > MAX_PARAM_GROUPS {
            self.stats.oversized_params += 1;
            groups.truncate(MAX_PARAM_GROUPS);
        }
        groups
    }

    /// Parse SGR parameters, handling both the semicolon-separated extended
    /// color form (`38;2;r;g;b`) and the colon sub-parameter form
    /// (`38:2::r:g:b`), per ITU-T T.416 / common xterm practice.
    fn parse_sgr(&mut self, params: &Params) -> Vec<SgrParam> {
        let groups = self.groups(params);
        let mut out = Vec::new();
        let mut i = 0;
        while i < groups.len() {
            let group = &groups[i];
            let code = group[0];
            match code {
                0 => out.push(SgrParam::Reset),
                1 => out.push(SgrParam::Bold),
                2 => out.push(SgrParam::Dim),
                3 => out.push(SgrParam::Italic),
                4 => {
                    let style = if group.len() > 1 {
                        UnderlineStyle::from_sub_param(group[1])
                    } else {
                        UnderlineStyle::Single
                    };
                    out.push(SgrParam::Underline(style));
                }
                5 => out.push(SgrParam::BlinkSlow),
                6 => out.push(SgrParam::BlinkFast),
                7 => out.push(SgrParam::Reverse),
                8 => out.push(SgrParam::Hidden),
                9 => out.push(SgrParam::Strikethrough),

                21 => out.push(SgrParam::NoBold),
                22 => out.push(SgrParam::NoDim),
                23 => out.push(SgrParam::NoItalic),
                24 => out.push(SgrParam::NoUnderline),
                25 => out.push(SgrParam::NoBlink),
                27 => out.push(SgrParam::NoReverse),
                28 => out.push(SgrParam::NoHidden),
                29 => out.push(SgrParam::NoStrikethrough),

                30..=37 => out.push(SgrParam::Foreground(Color::Indexed((code - 30) as u8))),
                38 => {
                    if let Some((color, consumed)) = extended_color(group, &groups[i..]) {
                        out.push(SgrParam::Foreground(color));
                        i += consumed;
                    } else {
                        self.stats.unknown_csi += 1;
                    }
                }
                39 => out.push(SgrParam::DefaultForeground),

                40..=47 => out.push(SgrParam::Background(Color::Indexed((code - 40) as u8))),
                48 => {
                    if let Some((color, consumed)) = extended_color(group, &groups[i..]) {
                        out.push(SgrParam::Background(color));
                        i += consumed;
                    } else {
                        self.stats.unknown_csi += 1;
                    }
                }
                49 => out.push(SgrParam::DefaultBackground),

                58 => {
                    if let Some((color, consumed)) = extended_color(group, &groups[i..]) {
                        out.push(SgrParam::UnderlineColor(color));
                        i += consumed;
                    } else {
                        self.stats.unknown_csi += 1;
                    }
                }
                59 => out.push(SgrParam::DefaultUnderlineColor),

                90..=97 => out.push(SgrParam::Foreground(Color::Indexed((code - 90 + 8) as u8))),
                100..=107 => out.push(SgrParam::Background(Color::Indexed((code - 100 + 8) as u8))),

                other => {
                    debug!("unhandled SGR parameter: {other}");
                    self.stats.unknown_csi += 1;
                }
            }
            i += 1;
        }
        out
    }

    fn parse_modes(&mut self, params: &Params, private: bool) -> Vec<Mode> {
        let mut modes = Vec::new();
        for group in params.iter() {
            let code = group[0];
            let mode = if private { dec_private_mode(code) } else { ansi_mode(code) };
            match mode {
                Some(m) => modes.push(m),
                None => debug!("unhandled {} mode: {code}", if private { "DEC" } else { "ANSI" }),
            }
        }
        modes
    }
}

/// Parse a `38`/`48`/`58`-style extended color spec, either as sub-parameters
/// colon-joined into `group` (`group.len() > 1`) or as separate semicolon
/// params following it in `rest` (`rest[0]` is the code itself).
///
/// Returns the resolved color and how many top-level parameter groups were
/// consumed beyond the leading code (0 for the colon form, since everything
/// lived in one group).
fn extended_color(group: &[u16], rest: &[Vec<u16>]) -> Option<(Color, usize)> {
    if group.len() > 1 {
        return match group[1] {
            5 if group.len() >= 3 => Some((Color::Indexed(group[2] as u8), 0)),
            2 if group.len() == 5 => {
                Some((Color::Rgb(group[2] as u8, group[3] as u8, group[4] as u8), 0))
            }
            2 if group.len() >= 6 => {
                let tail = &group[group.len() - 3..];
                Some((Color::Rgb(tail[0] as u8, tail[1] as u8, tail[2] as u8), 0))
            }
            _ => None,
        };
    }
    match rest.get(1).map(|g| g[0]) {
        Some(5) => rest.get(2).map(|g| (Color::Indexed(g[0] as u8), 2)),
        Some(2) => {
            if rest.len() > 4 {
                Some((
                    Color::Rgb(rest[2][0] as u8, rest[3][0] as u8, rest[4][0] as u8),
                    4,
                ))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn ansi_mode(code: u16) -> Option<Mode> {
    match code {
        4 => Some(Mode::Insert),
        20 => Some(Mode::LineFeedNewLine),
        _ => None,
    }
}

fn dec_private_mode(code: u16) -> Option<Mode> {
    match code {
        1 => Some(Mode::ApplicationCursor),
        6 => Some(Mode::OriginMode),
        7 => Some(Mode::AutoWrap),
        25 => Some(Mode::CursorVisible),
        47 => Some(Mode::AlternateScreen47),
        1000 => Some(Mode::MouseX10),
        1002 => Some(Mode::MouseButtonEvent),
        1003 => Some(Mode::MouseAnyEvent),
        1004 => Some(Mode::FocusReporting),
        1006 => Some(Mode::MouseSgrCoords),
        1015 => Some(Mode::MouseUrxvtCoords),
        1047 => Some(Mode::AlternateScreen1047),
        1049 => Some(Mode::AlternateScreen1049),
        2004 => Some(Mode::BracketedPaste),
        _ => None,
    }
}

/// Split a leading private-marker byte (`<`/`=`/`>`/`?`, 0x3c..=0x3f) off an
/// intermediates slice. CSI and DCS both carry the marker this way in vte.
fn split_private(intermediates: &[u8]) -> (Option<u8>, &[u8]) {
    match intermediates.split_first() {
        Some((&marker, rest)) if (0x3c..=0x3f).contains(&marker) => (Some(marker), rest),
        _ => (None, intermediates),
    }
}

impl Perform for TerminalPerformer {
    fn print(&mut self, c: char) {
        trace!("print: {c:?}");
        self.current_text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        trace!("execute: 0x{byte:02x}");
        self.flush_text();
        let code = match byte {
            0x07 => ControlCode::Bell,
            0x08 => ControlCode::Backspace,
            0x09 => ControlCode::Tab,
            0x0a => ControlCode::LineFeed,
            0x0b => ControlCode::VerticalTab,
            0x0c => ControlCode::FormFeed,
            0x0d => ControlCode::CarriageReturn,
            0x0e => ControlCode::ShiftOut,
            0x0f => ControlCode::ShiftIn,
            other => {
                debug!("unhandled execute byte: 0x{other:02x}");
                return;
            }
        };
        self.events.push(ParsedEvent::Control(code));
    }

    fn hook(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        trace!("hook: intermediates={intermediates:?} action={action}");
        self.flush_text();
        if ignore {
            return;
        }
        let (private, rest) = split_private(intermediates);
        let groups = self.groups(params);
        self.events.push(ParsedEvent::DcsHook(DcsHook {
            params: groups,
            intermediates: rest.to_vec(),
            private,
            final_byte: action as u8,
        }));
    }

    fn put(&mut self, byte: u8) {
        self.events.push(ParsedEvent::DcsPut(byte));
    }

    fn unhook(&mut self) {
        self.events.push(ParsedEvent::DcsUnhook);
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        trace!("osc: {} params, bell_terminated={bell_terminated}", params.len());
        self.flush_text();
        if params.is_empty() {
            return;
        }
        let Some(osc_num) = std::str::from_utf8(params[0]).ok().and_then(|s| s.parse::<u32>().ok())
        else {
            self.stats.unknown_osc += 1;
            return;
        };
        let event = match osc_num {
            0 | 2 => params.get(1).and_then(|p| std::str::from_utf8(p).ok()).map(|title| {
                OscEvent::SetTitle(title.to_string())
            }),
            1 => params.get(1).and_then(|p| std::str::from_utf8(p).ok()).map(|name| {
                OscEvent::SetIconName(name.to_string())
            }),
            4 => parse_osc4(&params[1..]).map(|(index, color)| OscEvent::SetPaletteColor {
                index,
                color,
            }),
            8 => parse_osc8(params),
            10 => params.get(1).and_then(|p| parse_color_spec(p)).map(OscEvent::SetForegroundColor),
            11 => params.get(1).and_then(|p| parse_color_spec(p)).map(OscEvent::SetBackgroundColor),
            12 => params.get(1).and_then(|p| parse_color_spec(p)).map(OscEvent::SetCursorColor),
            52 => parse_osc52(params),
            104 => params
                .get(1)
                .and_then(|p| std::str::from_utf8(p).ok())
                .and_then(|s| s.parse::<u8>().ok())
                .map(OscEvent::ResetPaletteColor),
            other => {
                debug!("unhandled OSC sequence: {other}");
                None
            }
        };
        match event {
            Some(event) => self.events.push(ParsedEvent::Osc(event)),
            None => self.stats.unknown_osc += 1,
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        trace!("csi: intermediates={intermediates:?} action={action}");
        self.flush_text();
        if ignore {
            return;
        }
        let (private, rest) = split_private(intermediates);
        let is_private = private == Some(b'?');

        let event = match (rest, action) {
            (b"", 'A') => Some(CsiEvent::CursorUp(self.get_param(params, 0, 1))),
            (b"", 'B') => Some(CsiEvent::CursorDown(self.get_param(params, 0, 1))),
            (b"", 'C') => Some(CsiEvent::CursorForward(self.get_param(params, 0, 1))),
            (b"", 'D') => Some(CsiEvent::CursorBack(self.get_param(params, 0, 1))),
            (b"", 'E') => Some(CsiEvent::CursorNextLine(self.get_param(params, 0, 1))),
            (b"", 'F') => Some(CsiEvent::CursorPreviousLine(self.get_param(params, 0, 1))),
            (b"", 'G') => Some(CsiEvent::CursorColumn(self.get_param(params, 0, 1))),
            (b"", 'd') => Some(CsiEvent::CursorRow(self.get_param(params, 0, 1))),
            (b"", 'H') | (b"", 'f') => Some(CsiEvent::CursorPosition {
                row: self.get_param(params, 0, 1),
                col: self.get_param(params, 1, 1),
            }),

            (b"", 'J') => Some(CsiEvent::EraseDisplay(erase_mode(self.get_param(params, 0, 0)))),
            (b"", 'K') => Some(CsiEvent::EraseLine(erase_mode(self.get_param(params, 0, 0)))),

            (b"", '@') => Some(CsiEvent::InsertChars(self.get_param(params, 0, 1))),
            (b"", 'P') => Some(CsiEvent::DeleteChars(self.get_param(params, 0, 1))),
            (b"", 'X') => Some(CsiEvent::EraseChars(self.get_param(params, 0, 1))),
            (b"", 'L') => Some(CsiEvent::InsertLines(self.get_param(params, 0, 1))),
            (b"", 'M') => Some(CsiEvent::DeleteLines(self.get_param(params, 0, 1))),

            (b"", 'S') => Some(CsiEvent::ScrollUp(self.get_param(params, 0, 1))),
            (b"", 'T') => Some(CsiEvent::ScrollDown(self.get_param(params, 0, 1))),

            (b"", 'r') => Some(CsiEvent::SetScrollRegion {
                top: self.get_raw_param(params, 0).map(|v| v - 1),
                bottom: self.get_raw_param(params, 1).map(|v| v - 1),
            }),
            (b"", 's') if !params.is_empty() => Some(CsiEvent::SetLeftRightMargin {
                left: self.get_raw_param(params, 0).map(|v| v - 1),
                right: self.get_raw_param(params, 1).map(|v| v - 1),
            }),
            (b"", 's') => Some(CsiEvent::SaveCursor),
            (b"", 'u') => Some(CsiEvent::RestoreCursor),

            (b"", 'm') => Some(CsiEvent::SetGraphicsRendition(self.parse_sgr(params))),

            (b"", 'h') => Some(CsiEvent::SetMode(self.parse_modes(params, is_private))),
            (b"", 'l') => Some(CsiEvent::ResetMode(self.parse_modes(params, is_private))),

            (b"", 'I') => Some(CsiEvent::CursorForwardTab(self.get_param(params, 0, 1))),
            (b"", 'Z') => Some(CsiEvent::CursorBackTab(self.get_param(params, 0, 1))),
            (b"", 'g') => Some(CsiEvent::TabClear(match self.get_param(params, 0, 0) {
                3 => TabClearMode::All,
                _ => TabClearMode::Current,
            })),

            (b"", 'n') => match self.get_param(params, 0, 0) {
                5 => Some(CsiEvent::DeviceStatusReport(DeviceStatusQuery::OperatingStatus)),
                6 => Some(CsiEvent::DeviceStatusReport(DeviceStatusQuery::CursorPosition)),
                _ => None,
            },
            (b"", 'c') if private.is_none() => Some(CsiEvent::PrimaryDeviceAttributes),
            (b"", 'c') if private == Some(b'>') => Some(CsiEvent::SecondaryDeviceAttributes),

            (b"!", 'p') => Some(CsiEvent::SoftReset),
            (b" ", 'q') => Some(CsiEvent::SetCursorStyle(self.get_param(params, 0, 0))),

            _ => None,
        };

        match event {
            Some(event) => self.events.push(ParsedEvent::Csi(event)),
            None => {
                debug!("unhandled CSI: intermediates={rest:?} private={private:?} action={action}");
                self.stats.unknown_csi += 1;
            }
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        trace!("esc: intermediates={intermediates:?} byte=0x{byte:02x}");
        self.flush_text();
        if ignore {
            return;
        }

        if let Some(&marker) = intermediates.first() {
            let slot = match marker {
                b'(' => Some(CharsetSlot::G0),
                b')' => Some(CharsetSlot::G1),
                b'*' => Some(CharsetSlot::G2),
                b'+' => Some(CharsetSlot::G3),
                _ => None,
            };
            return match slot {
                Some(slot) => {
                    let table = CharsetTable::from_designator(byte);
                    self.events.push(ParsedEvent::Esc(EscEvent::DesignateCharset { slot, table }));
                }
                None => {
                    debug!("unhandled ESC intermediate: 0x{marker:02x}");
                    self.stats.unknown_esc += 1;
                }
            };
        }

        let event = match byte {
            b'D' => Some(EscEvent::Index),
            b'E' => Some(EscEvent::NextLine),
            b'H' => Some(EscEvent::TabSet),
            b'M' => Some(EscEvent::ReverseIndex),
            b'c' => Some(EscEvent::ResetToInitialState),
            b'7' => Some(EscEvent::SaveCursor),
            b'8' => Some(EscEvent::RestoreCursor),
            b'=' => Some(EscEvent::KeypadApplicationMode),
            b'>' => Some(EscEvent::KeypadNumericMode),
            b'N' => Some(EscEvent::SingleShift2),
            b'O' => Some(EscEvent::SingleShift3),
            other => {
                debug!("unhandled ESC final: 0x{other:02x}");
                None
            }
        };
        match event {
            Some(event) => self.events.push(ParsedEvent::Esc(event)),
            None => self.stats.unknown_esc += 1,
        }
    }
}

fn erase_mode(param: u16) -> EraseMode {
    match param {
        0 => EraseMode::Below,
        1 => EraseMode::Above,
        2 => EraseMode::All,
        3 => EraseMode::Saved,
        _ => EraseMode::Below,
    }
}

/// `4;index;rgb:rr/gg/bb` — xterm's hex-slash color spec, possibly repeated
/// as further `index;spec` pairs in the same OSC (only the first pair is
/// parsed here; callers loop `parse_osc4` over the remaining tail).
fn parse_osc4(params: &[&[u8]]) -> Option<(u8, Color)> {
    let index = std::str::from_utf8(params.first()?).ok()?.parse::<u8>().ok()?;
    let color = parse_color_spec(params.get(1)?)?;
    Some((index, color))
}

/// `rgb:rr/gg/bb` (hex components, 2-4 digits each) to a truecolor value.
fn parse_color_spec(spec: &[u8]) -> Option<Color> {
    let text = std::str::from_utf8(spec).ok()?;
    let rest = text.strip_prefix("rgb:")?;
    let mut parts = rest.split('/');
    let r = hex_component(parts.next()?)?;
    let g = hex_component(parts.next()?)?;
    let b = hex_component(parts.next()?)?;
    Some(Color::Rgb(r, g, b))
}

fn hex_component(hex: &str) -> Option<u8> {
    let value = u32::from_str_radix(hex, 16).ok()?;
    let scaled = match hex.len() {
        1 => value * 17,
        2 => value,
        3 => value >> 4,
        4 => value >> 8,
        _ => return None,
    };
    Some(scaled.min(255) as u8)
}

fn parse_osc8(params: &[&[u8]]) -> Option<OscEvent> {
    let uri = std::str::from_utf8(params.get(2)?).ok()?;
    let id = params.get(1).and_then(|p| std::str::from_utf8(p).ok()).and_then(|param_str| {
        param_str.split(':').find_map(|kv| kv.strip_prefix("id=")).map(str::to_string)
    });
    if uri.is_empty() {
        Some(OscEvent::ResetHyperlink)
    } else {
        Some(OscEvent::SetHyperlink { id, uri: uri.to_string() })
    }
}

fn parse_osc52(params: &[&[u8]]) -> Option<OscEvent> {
    let selection = match params.get(1)?.first() {
        Some(b'c') => ClipboardSelection::Clipboard,
        Some(b'p') => ClipboardSelection::Primary,
        Some(b's') | Some(b'q') => ClipboardSelection::Secondary,
        _ => ClipboardSelection::Clipboard,
    };
    let raw = params.get(2)?;
    let payload = match *raw {
        b"?" => ClipboardPayload::Query,
        b"" => ClipboardPayload::Clear,
        other => ClipboardPayload::Set(std::str::from_utf8(other).ok()?.to_string()),
    };
    Some(OscEvent::Clipboard { selection, payload })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(input: &[u8]) -> Vec<ParsedEvent> {
        let mut parser = VteParser::new();
        parser.feed(input)
    }

    #[test]
    fn prints_batch_into_one_event() {
        assert_eq!(events(b"abc"), vec![ParsedEvent::Print("abc".to_string())]);
    }

    #[test]
    fn cursor_position_defaults_to_one() {
        assert_eq!(
            events(b"\x1b[H"),
            vec![ParsedEvent::Csi(CsiEvent::CursorPosition { row: 1, col: 1 })]
        );
    }

    #[test]
    fn sgr_semicolon_truecolor() {
        let result = events(b"\x1b[38;2;10;20;30m");
        assert_eq!(
            result,
            vec![ParsedEvent::Csi(CsiEvent::SetGraphicsRendition(vec![SgrParam::Foreground(
                Color::Rgb(10, 20, 30)
            )]))]
        );
    }

    #[test]
    fn sgr_colon_truecolor_with_colorspace() {
        let result = events(b"\x1b[38:2::255:128:0m");
        assert_eq!(
            result,
            vec![ParsedEvent::Csi(CsiEvent::SetGraphicsRendition(vec![SgrParam::Foreground(
                Color::Rgb(255, 128, 0)
            )]))]
        );
    }

    #[test]
    fn sgr_256_indexed() {
        let result = events(b"\x1b[38;5;160m");
        assert_eq!(
            result,
            vec![ParsedEvent::Csi(CsiEvent::SetGraphicsRendition(vec![SgrParam::Foreground(
                Color::Indexed(160)
            )]))]
        );
    }

    #[test]
    fn curly_underline_colon_form() {
        let result = events(b"\x1b[4:3m");
        assert_eq!(
            result,
            vec![ParsedEvent::Csi(CsiEvent::SetGraphicsRendition(vec![SgrParam::Underline(
                UnderlineStyle::Curly
            )]))]
        );
    }

    #[test]
    fn dec_private_mode_set() {
        assert_eq!(
            events(b"\x1b[?1049h"),
            vec![ParsedEvent::Csi(CsiEvent::SetMode(vec![Mode::AlternateScreen1049]))]
        );
    }

    #[test]
    fn bracketed_paste_mode() {
        assert_eq!(
            events(b"\x1b[?2004h"),
            vec![ParsedEvent::Csi(CsiEvent::SetMode(vec![Mode::BracketedPaste]))]
        );
    }

    #[test]
    fn osc_title() {
        assert_eq!(
            events(b"\x1b]0;hello\x07"),
            vec![ParsedEvent::Osc(OscEvent::SetTitle("hello".to_string()))]
        );
    }

    #[test]
    fn osc_hyperlink_with_id() {
        assert_eq!(
            events(b"\x1b]8;id=abc;https://example.com\x1b\\"),
            vec![ParsedEvent::Osc(OscEvent::SetHyperlink {
                id: Some("abc".to_string()),
                uri: "https://example.com".to_string(),
            })]
        );
    }

    #[test]
    fn osc_reset_hyperlink_on_empty_uri() {
        assert_eq!(
            events(b"\x1b]8;;\x07"),
            vec![ParsedEvent::Osc(OscEvent::ResetHyperlink)]
        );
    }

    #[test]
    fn osc_clipboard_set() {
        assert_eq!(
            events(b"\x1b]52;c;aGVsbG8=\x07"),
            vec![ParsedEvent::Osc(OscEvent::Clipboard {
                selection: ClipboardSelection::Clipboard,
                payload: ClipboardPayload::Set("aGVsbG8=".to_string()),
            })]
        );
    }

    #[test]
    fn soft_reset() {
        assert_eq!(events(b"\x1b[!p"), vec![ParsedEvent::Csi(CsiEvent::SoftReset)]);
    }

    #[test]
    fn cursor_style() {
        assert_eq!(
            events(b"\x1b[2 q"),
            vec![ParsedEvent::Csi(CsiEvent::SetCursorStyle(2))]
        );
    }

    #[test]
    fn charset_designation() {
        assert_eq!(
            events(b"\x1b(0"),
            vec![ParsedEvent::Esc(EscEvent::DesignateCharset {
                slot: CharsetSlot::G0,
                table: CharsetTable::DecSpecialGraphics,
            })]
        );
    }

    #[test]
    fn scroll_region_omitted_bottom() {
        assert_eq!(
            events(b"\x1b[5r"),
            vec![ParsedEvent::Csi(CsiEvent::SetScrollRegion { top: Some(4), bottom: None })]
        );
    }

    #[test]
    fn unknown_csi_increments_stats() {
        let mut parser = VteParser::new();
        parser.feed(b"\x1b[9999999z");
        assert_eq!(parser.stats().unknown_csi, 1);
    }

    #[test]
    fn control_codes() {
        assert_eq!(events(b"\x07"), vec![ParsedEvent::Control(ControlCode::Bell)]);
        assert_eq!(events(b"\r"), vec![ParsedEvent::Control(ControlCode::CarriageReturn)]);
    }
}
