//! Terminal state container (component D/E glue). Generalizes
//! `phosphor_core::terminal::state::TerminalState`: ties together the screen
//! buffer, scrollback, optional alternate buffer, cursor, modes, charset
//! slots, tab stops, active style, and palette into one struct the executor
//! mutates.

use vtcore_types::{CursorShape, CursorStyle, HorizontalMargin, Modes, Palette, Size, Style, VerticalMargin};

use crate::buffer::{ScreenBuffer, ScrollbackBuffer};
use crate::charset::{CharsetState, TabStops};
use crate::cursor::Cursor;
use crate::hyperlink::HyperlinkTable;

pub struct TerminalState {
    pub screen: ScreenBuffer,
    pub scrollback: ScrollbackBuffer,
    /// `Some` while any of modes 47/1047/1049 is active.
    pub alternate: Option<ScreenBuffer>,
    pub cursor: Cursor,
    pub modes: Modes,
    pub charset: CharsetState,
    pub tab_stops: TabStops,
    pub active_style: Style,
    pub palette: Palette,
    pub hyperlinks: HyperlinkTable,
    pub vertical_margin: VerticalMargin,
    pub horizontal_margin: HorizontalMargin,
    pub title: String,
    pub icon_name: String,
    pub cursor_style: CursorStyle,
    /// DCS payload bytes dropped for want of a sink (`Callbacks::on_dcs_sink`).
    pub dcs_bytes_discarded: u64,
}

impl TerminalState {
    pub fn new(size: Size, scrollback_capacity: usize) -> Self {
        Self {
            screen: ScreenBuffer::new(size),
            scrollback: ScrollbackBuffer::new(scrollback_capacity),
            alternate: None,
            cursor: Cursor::new(),
            modes: Modes::initial(),
            charset: CharsetState::new(),
            tab_stops: TabStops::new(size.cols),
            active_style: Style::default(),
            palette: Palette::default(),
            hyperlinks: HyperlinkTable::new(),
            vertical_margin: VerticalMargin::full(size.rows),
            horizontal_margin: HorizontalMargin::full(size.cols),
            title: String::new(),
            icon_name: String::new(),
            cursor_style: CursorStyle { shape: CursorShape::Block, blinking: true },
            dcs_bytes_discarded: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.screen.size()
    }

    /// The grid currently receiving writes: the alternate buffer when one of
    /// 47/1047/1049 is active, the primary screen otherwise.
    pub fn active_buffer(&self) -> &ScreenBuffer {
        self.alternate.as_ref().unwrap_or(&self.screen)
    }

    pub fn active_buffer_mut(&mut self) -> &mut ScreenBuffer {
        self.alternate.as_mut().unwrap_or(&mut self.screen)
    }

    pub fn enter_alternate_screen(&mut self) {
        if self.alternate.is_none() {
            self.alternate = Some(ScreenBuffer::new(self.screen.size()));
        }
    }

    pub fn exit_alternate_screen(&mut self) {
        self.alternate = None;
    }

    pub fn reset_margins(&mut self) {
        let size = self.size();
        self.vertical_margin = VerticalMargin::full(size.rows);
        self.horizontal_margin = HorizontalMargin::full(size.cols);
    }

    /// Soft reset (DECSTR): cursor, modes, and margins, leaving screen
    /// contents untouched.
    pub fn soft_reset(&mut self) {
        self.cursor = Cursor::new();
        self.modes = Modes::initial();
        self.active_style = Style::default();
        self.reset_margins();
    }

    /// Hard reset (RIS): everything soft reset touches, plus both grids,
    /// scrollback, tab stops, and charset state.
    pub fn hard_reset(&mut self) {
        let size = self.size();
        self.screen = ScreenBuffer::new(size);
        self.alternate = None;
        self.scrollback.clear();
        self.tab_stops = TabStops::new(size.cols);
        self.charset = CharsetState::new();
        self.hyperlinks = HyperlinkTable::new();
        self.title.clear();
        self.icon_name.clear();
        self.cursor_style = CursorStyle { shape: CursorShape::Block, blinking: true };
        self.palette = Palette::default();
        self.dcs_bytes_discarded = 0;
        self.soft_reset();
    }
}
