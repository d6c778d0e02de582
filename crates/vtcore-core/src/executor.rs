//! Command executor (component G): turns `ParsedEvent`s into mutations of
//! `TerminalState`. Generalizes `phosphor_core::ansi::AnsiProcessor`'s
//! `process_event`/`process_csi`/`process_osc`/`process_esc` dispatch
//! structure onto the richer event/state model.

use base64::Engine;
use tracing::{instrument, trace, warn};
use unicode_width::UnicodeWidthChar;

use vtcore_types::{
    Cell, ClipboardPayload, ClipboardSelection, Color, ControlCode, CsiEvent, CursorShape, CursorStyle,
    DeviceStatusQuery, EraseMode, EscEvent, HorizontalMargin, Mode, OscEvent, ParsedEvent, Position, Size,
    TabClearMode, VerticalMargin,
};

use crate::config::{Callbacks, DcsChunk};
use crate::sgr;
use crate::state::TerminalState;

pub struct CommandExecutor {
    pub state: TerminalState,
    callbacks: Callbacks,
}

impl CommandExecutor {
    pub fn new(state: TerminalState, callbacks: Callbacks) -> Self {
        Self { state, callbacks }
    }

    #[instrument(level = "trace", skip(self, events))]
    pub fn dispatch_all(&mut self, events: Vec<ParsedEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ParsedEvent) {
        match event {
            ParsedEvent::Print(text) => self.print(&text),
            ParsedEvent::Control(code) => self.control(code),
            ParsedEvent::Csi(csi) => self.csi(csi),
            ParsedEvent::Osc(osc) => self.osc(osc),
            ParsedEvent::Esc(esc) => self.esc(esc),
            ParsedEvent::DcsHook(hook) => self.dcs(DcsChunk::Hook(hook)),
            ParsedEvent::DcsPut(byte) => self.dcs(DcsChunk::Put(byte)),
            ParsedEvent::DcsUnhook => self.dcs(DcsChunk::Unhook),
        }
    }

    /// Route a streamed DCS chunk (Sixel, DECRQSS, termcap query) to the
    /// host's passthrough sink. Without one wired, payload bytes are counted
    /// in `dcs_bytes_discarded` rather than silently vanishing.
    fn dcs(&mut self, chunk: DcsChunk) {
        if let Some(cb) = self.callbacks.on_dcs_sink.as_mut() {
            cb(chunk);
            return;
        }
        if let DcsChunk::Put(_) = chunk {
            self.state.dcs_bytes_discarded += 1;
        }
        trace!("dcs chunk discarded, no sink wired");
    }

    // -- printable text -----------------------------------------------

    fn print(&mut self, text: &str) {
        for ch in text.chars() {
            self.print_char(ch);
        }
    }

    fn print_char(&mut self, ch: char) {
        let translated = self.state.charset.translate(ch);
        let width = UnicodeWidthChar::width(translated).unwrap_or(1).max(1) as u8;
        let autowrap = self.state.modes.get(Mode::AutoWrap);

        if self.state.cursor.pending_wrap() {
            if autowrap {
                self.newline_wrap();
            } else {
                // DECAWM off: stay pinned at the right margin and overwrite
                // it in place rather than wrapping.
                self.state.cursor.set_pending_wrap(false);
            }
        }

        let size = self.state.size();
        let right_edge = self.state.horizontal_margin.right.min(size.cols.saturating_sub(1));
        let mut col = self.state.cursor.position().col;

        if col > right_edge {
            if autowrap {
                self.newline_wrap();
                col = self.state.cursor.position().col;
            } else {
                col = right_edge;
                self.state.cursor.set_col(col);
            }
        }

        // A wide cluster can never be split across the margin boundary: wrap
        // first so its continuation cell always lands in range, regardless
        // of DECAWM (testable property 5).
        if width == 2 && col == right_edge {
            self.newline_wrap();
            col = self.state.cursor.position().col;
        }

        let row = self.state.cursor.position().row;

        if self.state.modes.get(Mode::Insert) {
            let style = self.state.active_style;
            self.state.active_buffer_mut().insert_cells(row, col, width as u16, style);
        }

        let style = self.state.active_style;
        if width == 2 {
            self.state.active_buffer_mut().write_cell(row, col, Cell::wide(translated.to_string(), style));
            self.state.active_buffer_mut().write_cell(row, col + 1, Cell::continuation(style));
        } else {
            self.state.active_buffer_mut().write_cell(row, col, Cell::with_style(translated, style));
        }

        let next_col = col as u32 + width as u32;
        if next_col > right_edge as u32 {
            self.state.cursor.set_col(right_edge);
            if autowrap {
                self.state.cursor.set_pending_wrap(true);
            }
        } else {
            self.state.cursor.set_col(next_col as u16);
        }
    }

    /// Advance to the next row, wrapping/scrolling within the active
    /// vertical margin, and clear pending-wrap.
    fn newline_wrap(&mut self) {
        let row = self.state.cursor.position().row;
        if let Some(line) = self.state.active_buffer_mut().line_mut(row) {
            line.wrapped = true;
        }
        self.state.cursor.set_pending_wrap(false);
        self.line_feed();
        self.state.cursor.set_col(self.state.horizontal_margin.left);
    }

    // -- control codes --------------------------------------------------

    fn control(&mut self, code: ControlCode) {
        match code {
            ControlCode::Bell => {
                if let Some(cb) = self.callbacks.on_bell.as_mut() {
                    cb();
                }
            }
            ControlCode::Backspace => self.state.cursor.move_left(1),
            ControlCode::Tab => {
                let next = self.state.tab_stops.next(self.state.cursor.position().col);
                self.state.cursor.set_col(next);
            }
            ControlCode::LineFeed | ControlCode::VerticalTab | ControlCode::FormFeed => {
                self.line_feed();
                if self.state.modes.get(Mode::LineFeedNewLine) {
                    self.state.cursor.set_col(self.state.horizontal_margin.left);
                }
            }
            ControlCode::CarriageReturn => self.state.cursor.set_col(self.state.horizontal_margin.left),
            ControlCode::ShiftOut => self.state.charset.invoke_gl(vtcore_types::CharsetSlot::G1),
            ControlCode::ShiftIn => self.state.charset.invoke_gl(vtcore_types::CharsetSlot::G0),
        }
    }

    /// Move down one row, scrolling the active vertical margin when already
    /// at its bottom edge.
    fn line_feed(&mut self) {
        let margin = self.state.vertical_margin;
        let row = self.state.cursor.position().row;
        if row >= margin.bottom {
            let style = self.state.active_style;
            if let Some(alt) = self.state.alternate.as_mut() {
                alt.scroll_up(margin.top, margin.bottom, 1, style, None);
            } else {
                self.state.screen.scroll_up(margin.top, margin.bottom, 1, style, Some(&mut self.state.scrollback));
            }
        } else {
            self.state.cursor.move_down(1);
        }
    }

    // -- CSI --------------------------------------------------------------

    fn csi(&mut self, event: CsiEvent) {
        match event {
            CsiEvent::CursorUp(n) => self.state.cursor.move_up(n),
            CsiEvent::CursorDown(n) => self.state.cursor.move_down(n),
            CsiEvent::CursorForward(n) => self.state.cursor.move_right(n),
            CsiEvent::CursorBack(n) => self.state.cursor.move_left(n),
            CsiEvent::CursorNextLine(n) => {
                self.state.cursor.move_down(n);
                self.state.cursor.set_col(self.state.horizontal_margin.left);
            }
            CsiEvent::CursorPreviousLine(n) => {
                self.state.cursor.move_up(n);
                self.state.cursor.set_col(self.state.horizontal_margin.left);
            }
            CsiEvent::CursorColumn(col) => self.move_cursor_to(None, Some(col.saturating_sub(1))),
            CsiEvent::CursorRow(row) => self.move_cursor_to(Some(row.saturating_sub(1)), None),
            CsiEvent::CursorPosition { row, col } => {
                self.move_cursor_to(Some(row.saturating_sub(1)), Some(col.saturating_sub(1)))
            }

            CsiEvent::EraseDisplay(mode) => self.erase_display(mode),
            CsiEvent::EraseLine(mode) => self.erase_line(mode),

            CsiEvent::InsertChars(n) => {
                let (row, col) = self.row_col();
                let style = self.state.active_style;
                self.state.active_buffer_mut().insert_cells(row, col, n.max(1), style);
            }
            CsiEvent::DeleteChars(n) => {
                let (row, col) = self.row_col();
                let style = self.state.active_style;
                self.state.active_buffer_mut().delete_cells(row, col, n.max(1), style);
            }
            CsiEvent::EraseChars(n) => {
                let (row, col) = self.row_col();
                let style = self.state.active_style;
                self.state.active_buffer_mut().erase_cells(row, col, n.max(1), style);
            }
            CsiEvent::InsertLines(n) => {
                let (row, _) = self.row_col();
                let margin = self.state.vertical_margin;
                let style = self.state.active_style;
                self.state.active_buffer_mut().insert_lines(row, margin.top, margin.bottom, n.max(1), style);
            }
            CsiEvent::DeleteLines(n) => {
                let (row, _) = self.row_col();
                let margin = self.state.vertical_margin;
                let style = self.state.active_style;
                self.state.active_buffer_mut().delete_lines(row, margin.top, margin.bottom, n.max(1), style);
            }

            CsiEvent::ScrollUp(n) => {
                let margin = self.state.vertical_margin;
                let style = self.state.active_style;
                if let Some(alt) = self.state.alternate.as_mut() {
                    alt.scroll_up(margin.top, margin.bottom, n.max(1), style, None);
                } else {
                    self.state.screen.scroll_up(margin.top, margin.bottom, n.max(1), style, Some(&mut self.state.scrollback));
                }
            }
            CsiEvent::ScrollDown(n) => {
                let margin = self.state.vertical_margin;
                let style = self.state.active_style;
                self.state.active_buffer_mut().scroll_down(margin.top, margin.bottom, n.max(1), style);
            }
            CsiEvent::SetScrollRegion { top, bottom } => {
                let rows = self.state.size().rows;
                let top = top.unwrap_or(1).saturating_sub(1);
                let bottom = bottom.map(|b| b.saturating_sub(1)).unwrap_or(rows.saturating_sub(1));
                if top < bottom {
                    self.state.vertical_margin = VerticalMargin { top, bottom: bottom.min(rows.saturating_sub(1)) };
                } else {
                    self.state.vertical_margin = VerticalMargin::full(rows);
                }
                self.home_cursor();
            }
            CsiEvent::SetLeftRightMargin { left, right } => {
                let cols = self.state.size().cols;
                let left = left.unwrap_or(1).saturating_sub(1);
                let right = right.map(|r| r.saturating_sub(1)).unwrap_or(cols.saturating_sub(1));
                if left < right {
                    self.state.horizontal_margin = HorizontalMargin { left, right: right.min(cols.saturating_sub(1)) };
                } else {
                    self.state.horizontal_margin = HorizontalMargin::full(cols);
                }
            }

            CsiEvent::SetGraphicsRendition(params) => sgr::apply(&mut self.state.active_style, &params),

            CsiEvent::SaveCursor => {
                let origin = self.state.modes.get(Mode::OriginMode);
                self.state.cursor.save_decsc(self.state.charset.gl(), origin);
            }
            CsiEvent::RestoreCursor => {
                if let Some(saved) = self.state.cursor.restore_decsc() {
                    self.state.charset.invoke_gl(saved.charset_slot);
                    self.state.modes.set_mode(Mode::OriginMode, saved.origin_mode);
                }
            }

            CsiEvent::SetMode(modes) => modes.into_iter().for_each(|m| self.set_mode(m, true)),
            CsiEvent::ResetMode(modes) => modes.into_iter().for_each(|m| self.set_mode(m, false)),

            CsiEvent::HorizontalTabSet => self.state.tab_stops.set(self.state.cursor.position().col),
            CsiEvent::TabClear(TabClearMode::Current) => self.state.tab_stops.clear(self.state.cursor.position().col),
            CsiEvent::TabClear(TabClearMode::All) => self.state.tab_stops.clear_all(),
            CsiEvent::CursorForwardTab(n) => {
                let mut col = self.state.cursor.position().col;
                for _ in 0..n.max(1) {
                    col = self.state.tab_stops.next(col);
                }
                self.state.cursor.set_col(col);
            }
            CsiEvent::CursorBackTab(n) => {
                let mut col = self.state.cursor.position().col;
                for _ in 0..n.max(1) {
                    col = self.state.tab_stops.previous(col);
                }
                self.state.cursor.set_col(col);
            }

            CsiEvent::PrimaryDeviceAttributes => self.respond(b"\x1b[?62;1;2;6c"),
            CsiEvent::SecondaryDeviceAttributes => self.respond(b"\x1b[>0;10;1c"),
            CsiEvent::DeviceStatusReport(query) => self.device_status_report(query),

            CsiEvent::SoftReset => self.state.soft_reset(),
            CsiEvent::SetCursorStyle(code) => self.state.cursor_style = cursor_style_from_code(code),
        }
    }

    fn row_col(&self) -> (u16, u16) {
        let pos = self.state.cursor.position();
        (pos.row, pos.col)
    }

    /// Move the cursor, honoring origin mode: coordinates are relative to
    /// the scroll region when `DECOM` is set. Omitted axes keep their
    /// current value.
    fn move_cursor_to(&mut self, row: Option<u16>, col: Option<u16>) {
        let origin = self.state.modes.get(Mode::OriginMode);
        let vmargin = self.state.vertical_margin;
        let hmargin = self.state.horizontal_margin;
        let size = self.state.size();

        let target_row = match row {
            Some(r) if origin => (vmargin.top + r).min(vmargin.bottom),
            Some(r) => r.min(size.rows.saturating_sub(1)),
            None => self.state.cursor.position().row,
        };
        let target_col = match col {
            Some(c) if origin => (hmargin.left + c).min(hmargin.right),
            Some(c) => c.min(size.cols.saturating_sub(1)),
            None => self.state.cursor.position().col,
        };
        self.state.cursor.set_position(Position::new(target_row, target_col));
    }

    /// Home the cursor after a margin change: top-left of the scroll region
    /// under origin mode, absolute (0, 0) otherwise.
    fn home_cursor(&mut self) {
        let pos = if self.state.modes.get(Mode::OriginMode) {
            Position::new(self.state.vertical_margin.top, self.state.horizontal_margin.left)
        } else {
            Position::new(0, 0)
        };
        self.state.cursor.set_position(pos);
    }

    fn erase_display(&mut self, mode: EraseMode) {
        let size = self.state.size();
        let (row, col) = self.row_col();
        let style = self.state.active_style;
        match mode {
            EraseMode::Below => {
                self.state.active_buffer_mut().erase_cells(row, col, size.cols, style);
                self.state
                    .active_buffer_mut()
                    .clear_region((row + 1)..=size.rows.saturating_sub(1), 0..size.cols, style);
            }
            EraseMode::Above => {
                self.state.active_buffer_mut().erase_cells(row, 0, col + 1, style);
                if row > 0 {
                    self.state.active_buffer_mut().clear_region(0..=(row - 1), 0..size.cols, style);
                }
            }
            EraseMode::All => self.state.active_buffer_mut().clear(style),
            EraseMode::Saved => {
                if self.state.alternate.is_none() {
                    self.state.scrollback.clear();
                }
            }
        }
    }

    fn erase_line(&mut self, mode: EraseMode) {
        let size = self.state.size();
        let (row, col) = self.row_col();
        let style = self.state.active_style;
        match mode {
            EraseMode::Below => {
                self.state.active_buffer_mut().erase_cells(row, col, size.cols, style);
            }
            EraseMode::Above => {
                self.state.active_buffer_mut().erase_cells(row, 0, col + 1, style);
            }
            EraseMode::All | EraseMode::Saved => {
                self.state.active_buffer_mut().erase_cells(row, 0, size.cols, style);
            }
        }
    }

    fn set_mode(&mut self, mode: Mode, enabled: bool) {
        match mode {
            Mode::AlternateScreen47 => self.switch_alternate_screen(enabled, false),
            Mode::AlternateScreen1047 => self.switch_alternate_screen(enabled, true),
            Mode::AlternateScreen1049 => self.switch_alternate_screen_1049(enabled),
            _ => self.state.modes.set_mode(mode, enabled),
        }
    }

    fn switch_alternate_screen(&mut self, enabled: bool, clear_on_exit: bool) {
        self.state.modes.set_mode(
            if clear_on_exit { Mode::AlternateScreen1047 } else { Mode::AlternateScreen47 },
            enabled,
        );
        if enabled {
            self.state.enter_alternate_screen();
        } else {
            if clear_on_exit {
                if let Some(alt) = self.state.alternate.as_mut() {
                    alt.clear(self.state.active_style);
                }
            }
            self.state.exit_alternate_screen();
        }
    }

    fn switch_alternate_screen_1049(&mut self, enabled: bool) {
        self.state.modes.set_mode(Mode::AlternateScreen1049, enabled);
        let origin = self.state.modes.get(Mode::OriginMode);
        if enabled {
            self.state.cursor.save_alt_screen(self.state.charset.gl(), origin);
            self.state.enter_alternate_screen();
            if let Some(alt) = self.state.alternate.as_mut() {
                alt.clear(self.state.active_style);
            }
        } else {
            self.state.exit_alternate_screen();
            if let Some(saved) = self.state.cursor.restore_alt_screen() {
                self.state.charset.invoke_gl(saved.charset_slot);
                self.state.modes.set_mode(Mode::OriginMode, saved.origin_mode);
            }
        }
    }

    fn device_status_report(&mut self, query: DeviceStatusQuery) {
        match query {
            DeviceStatusQuery::OperatingStatus => self.respond(b"\x1b[0n"),
            DeviceStatusQuery::CursorPosition => {
                let pos = self.state.cursor.position();
                let report = format!("\x1b[{};{}R", pos.row + 1, pos.col + 1);
                self.respond(report.as_bytes());
            }
        }
    }

    fn respond(&mut self, bytes: &[u8]) {
        if let Some(cb) = self.callbacks.on_device_response.as_mut() {
            cb(bytes);
        }
    }

    // -- OSC --------------------------------------------------------------

    fn osc(&mut self, event: OscEvent) {
        match event {
            OscEvent::SetTitle(title) => {
                self.state.title = title;
                if let Some(cb) = self.callbacks.on_title_changed.as_mut() {
                    cb(&self.state.title);
                }
            }
            OscEvent::SetIconName(name) => self.state.icon_name = name,
            OscEvent::SetHyperlink { id, uri } => {
                let hyperlink_id = self.state.hyperlinks.intern(id, uri);
                self.state.active_style.hyperlink = Some(hyperlink_id);
            }
            OscEvent::ResetHyperlink => self.state.active_style.hyperlink = None,
            OscEvent::SetPaletteColor { index, color } => {
                if let Color::Rgb(r, g, b) = color {
                    self.state.palette.set_basic(index, (r, g, b));
                }
            }
            OscEvent::ResetPaletteColor(index) => self.state.palette.reset_basic(index),
            OscEvent::SetForegroundColor(color) => self.state.active_style.fg = color,
            OscEvent::SetBackgroundColor(color) => self.state.active_style.bg = color,
            OscEvent::SetCursorColor(_) => {}
            OscEvent::Clipboard { selection, payload } => self.clipboard(selection, payload),
        }
    }

    fn clipboard(&mut self, selection: ClipboardSelection, payload: ClipboardPayload) {
        match payload {
            ClipboardPayload::Query => {
                if let Some(cb) = self.callbacks.on_clipboard_read.as_mut() {
                    if let Some(contents) = cb(selection) {
                        let encoded = base64::engine::general_purpose::STANDARD.encode(contents);
                        let report = format!("\x1b]52;c;{encoded}\x1b\\");
                        self.respond(report.as_bytes());
                    }
                }
            }
            ClipboardPayload::Set(base64_payload) => {
                if let Some(cb) = self.callbacks.on_clipboard_write.as_mut() {
                    if let Ok(bytes) = base64::engine::general_purpose::STANDARD.decode(&base64_payload) {
                        if let Ok(text) = String::from_utf8(bytes) {
                            cb(selection, &text);
                        }
                    }
                }
            }
            ClipboardPayload::Clear => {
                if let Some(cb) = self.callbacks.on_clipboard_write.as_mut() {
                    cb(selection, "");
                }
            }
        }
    }

    // -- ESC ---------------------------------------------------------------

    fn esc(&mut self, event: EscEvent) {
        match event {
            EscEvent::Index => self.line_feed(),
            EscEvent::NextLine => {
                self.line_feed();
                self.state.cursor.set_col(self.state.horizontal_margin.left);
            }
            EscEvent::TabSet => self.state.tab_stops.set(self.state.cursor.position().col),
            EscEvent::ReverseIndex => self.reverse_index(),
            EscEvent::KeypadApplicationMode | EscEvent::KeypadNumericMode => {
                trace!("keypad mode is a renderer/input concern, recorded nowhere in state");
            }
            EscEvent::SaveCursor => {
                let origin = self.state.modes.get(Mode::OriginMode);
                self.state.cursor.save_decsc(self.state.charset.gl(), origin);
            }
            EscEvent::RestoreCursor => {
                if let Some(saved) = self.state.cursor.restore_decsc() {
                    self.state.charset.invoke_gl(saved.charset_slot);
                    self.state.modes.set_mode(Mode::OriginMode, saved.origin_mode);
                }
            }
            EscEvent::ResetToInitialState => self.state.hard_reset(),
            EscEvent::SingleShift2 => self.state.charset.single_shift(vtcore_types::CharsetSlot::G2),
            EscEvent::SingleShift3 => self.state.charset.single_shift(vtcore_types::CharsetSlot::G3),
            EscEvent::DesignateCharset { slot, table } => self.state.charset.designate(slot, table),
        }
    }

    fn reverse_index(&mut self) {
        let margin = self.state.vertical_margin;
        let row = self.state.cursor.position().row;
        if row <= margin.top {
            let style = self.state.active_style;
            self.state.active_buffer_mut().scroll_down(margin.top, margin.bottom, 1, style);
        } else {
            self.state.cursor.move_up(1);
        }
    }

    // -- resize --------------------------------------------------------------

    #[instrument(level = "trace", skip(self))]
    pub fn resize(&mut self, size: Size) {
        let style = self.state.active_style;
        self.state.screen.resize_reflow(size, style, &mut self.state.scrollback);
        if let Some(alt) = self.state.alternate.as_mut() {
            alt.resize_truncate(size, style);
        }
        self.state.tab_stops.resize(size.cols);
        self.state.reset_margins();
        let pos = self.state.cursor.position();
        self.state.cursor.set_position(Position::new(pos.row.min(size.rows.saturating_sub(1)), pos.col.min(size.cols.saturating_sub(1))));
    }
}

fn cursor_style_from_code(code: u16) -> CursorStyle {
    match code {
        0 | 1 => CursorStyle { shape: CursorShape::Block, blinking: true },
        2 => CursorStyle { shape: CursorShape::Block, blinking: false },
        3 => CursorStyle { shape: CursorShape::Underline, blinking: true },
        4 => CursorStyle { shape: CursorShape::Underline, blinking: false },
        5 => CursorStyle { shape: CursorShape::Bar, blinking: true },
        6 => CursorStyle { shape: CursorShape::Bar, blinking: false },
        other => {
            warn!(code = other, "unknown DECSCUSR code, defaulting to blinking block");
            CursorStyle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TerminalState;
    use vtcore_parser::VteParser;

    fn run(input: &[u8], cols: u16, rows: u16) -> CommandExecutor {
        let mut parser = VteParser::new();
        let callbacks = Callbacks::new().with_device_response(Box::new(|_| {}));
        let mut executor = CommandExecutor::new(TerminalState::new(Size::new(cols, rows), 100), callbacks);
        let events = parser.feed(input);
        executor.dispatch_all(events);
        executor
    }

    #[test]
    fn prints_text_at_origin() {
        let executor = run(b"hi", 10, 3);
        assert_eq!(executor.state.screen.cell(0, 0).unwrap().cluster, "h");
        assert_eq!(executor.state.screen.cell(0, 1).unwrap().cluster, "i");
        assert_eq!(executor.state.cursor.position(), Position::new(0, 2));
    }

    #[test]
    fn autowrap_defers_until_next_printable() {
        let executor = run(b"abcdefghij", 5, 2);
        assert!(executor.state.cursor.pending_wrap());
        let executor = run(b"abcdefghijk", 5, 2);
        assert_eq!(executor.state.screen.cell(1, 0).unwrap().cluster, "k");
    }

    #[test]
    fn carriage_return_line_feed_advances_row() {
        let executor = run(b"ab\r\ncd", 5, 3);
        assert_eq!(executor.state.cursor.position(), Position::new(1, 2));
        assert_eq!(executor.state.screen.cell(1, 0).unwrap().cluster, "c");
    }

    #[test]
    fn scroll_at_bottom_margin_feeds_scrollback() {
        let executor = run(b"1\r\n2\r\n3\r\n4", 5, 3);
        assert_eq!(executor.state.scrollback.len(), 1);
        assert_eq!(executor.state.screen.cell(2, 0).unwrap().cluster, "4");
    }

    #[test]
    fn sgr_bold_sets_attribute_and_resets_on_sgr0() {
        let executor = run(b"\x1b[1mx\x1b[0my", 5, 2);
        let bold_cell = executor.state.screen.cell(0, 0).unwrap();
        assert!(bold_cell.style.flags.contains(vtcore_types::AttributeFlags::BOLD));
        let reset_cell = executor.state.screen.cell(0, 1).unwrap();
        assert!(!reset_cell.style.flags.contains(vtcore_types::AttributeFlags::BOLD));
    }

    #[test]
    fn alternate_screen_1049_saves_and_restores_cursor() {
        let executor = run(b"\x1b[5;5H\x1b[?1049h\x1b[1;1Hx\x1b[?1049l", 10, 10);
        assert_eq!(executor.state.cursor.position(), Position::new(4, 4));
        assert!(executor.state.alternate.is_none());
    }

    #[test]
    fn origin_mode_confines_cursor_positioning_to_scroll_region() {
        let executor = run(b"\x1b[3;6r\x1b[?6h\x1b[1;1H", 10, 10);
        assert_eq!(executor.state.cursor.position(), Position::new(2, 0));
    }

    #[test]
    fn disabling_autowrap_overwrites_last_column_instead_of_wrapping() {
        // 5-col line: "abcde" fills it, DECAWM off, then "X" should overwrite
        // the 'e' in place rather than wrapping to row 1.
        let executor = run(b"\x1b[?7labcdeX", 5, 2);
        assert_eq!(executor.state.screen.cell(0, 4).unwrap().cluster, "X");
        assert_eq!(executor.state.cursor.position(), Position::new(0, 4));
        assert!(executor.state.screen.cell(1, 0).unwrap().cluster.is_empty());
    }

    #[test]
    fn autowrap_still_applies_when_mode_is_re_enabled() {
        let executor = run(b"\x1b[?7l\x1b[?7habcdeX", 5, 2);
        assert_eq!(executor.state.screen.cell(1, 0).unwrap().cluster, "X");
    }

    #[test]
    fn wide_character_forces_wrap_at_last_column_even_with_single_width_prefix() {
        // 9 ASCII columns fill a 10-col line up to the last column (index 9);
        // the wide char must wrap rather than split across the boundary.
        let mut input = b"abcdefghi".to_vec();
        input.extend_from_slice("\u{4f60}".as_bytes());
        let executor = run(&input, 10, 2);
        assert!(executor.state.screen.cell(0, 9).unwrap().cluster.is_empty());
        let wide = executor.state.screen.cell(1, 0).unwrap();
        assert_eq!(wide.width, 2);
        assert!(executor.state.screen.cell(1, 1).unwrap().is_continuation());
    }

    #[test]
    fn wide_character_writes_continuation_cell() {
        let executor = run("\u{4f60}".as_bytes(), 10, 2);
        let first = executor.state.screen.cell(0, 0).unwrap();
        assert_eq!(first.width, 2);
        assert!(executor.state.screen.cell(0, 1).unwrap().is_continuation());
    }

    #[test]
    fn soft_reset_clears_attributes_without_touching_grid() {
        let mut executor = run(b"\x1b[1mhi", 10, 2);
        executor.csi(CsiEvent::SoftReset);
        assert_eq!(executor.state.active_style, vtcore_types::Style::default());
        assert_eq!(executor.state.screen.cell(0, 0).unwrap().cluster, "h");
    }
}
