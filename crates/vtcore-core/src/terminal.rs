//! Public facade (component J): owns the parser and executor, exposes the
//! synchronous `feed`/`resize`/`snapshot`/`take_damage` surface described by
//! §5/§6. No PTY, no async runtime, no background threads — a host drives
//! this entirely by calling these methods from its own event loop.

use tracing::instrument;
use vtcore_types::{
    CursorState, Line, Mode, Region, Result, Size, Snapshot, TerminalError,
};
use vtcore_parser::VteParser;

use crate::config::{Callbacks, TerminalConfig};
use crate::damage::diff_grid;
use crate::executor::CommandExecutor;
use crate::state::TerminalState;

pub struct Terminal {
    parser: VteParser,
    executor: CommandExecutor,
    previous_snapshot_lines: Vec<Line>,
}

impl Terminal {
    pub fn new(config: TerminalConfig) -> Result<Self> {
        config.validate()?;
        let TerminalConfig { cols, rows, scrollback_capacity, callbacks } = config;
        let state = TerminalState::new(Size::new(cols, rows), scrollback_capacity);
        let previous_snapshot_lines = state.screen.lines().to_vec();
        Ok(Self {
            parser: VteParser::new(),
            executor: CommandExecutor::new(state, callbacks),
            previous_snapshot_lines,
        })
    }

    pub fn with_callbacks(cols: u16, rows: u16, callbacks: Callbacks) -> Result<Self> {
        Self::new(TerminalConfig::new(cols, rows).with_callbacks(callbacks))
    }

    /// Feed raw terminal output bytes; returns the number of bytes consumed
    /// (always `data.len()` — nothing is ever buffered across calls except
    /// the parser's own UTF-8/escape-sequence continuation state).
    #[instrument(level = "trace", skip(self, data))]
    pub fn feed(&mut self, data: &[u8]) -> usize {
        let events = self.parser.feed(data);
        self.executor.dispatch_all(events);
        data.len()
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        if cols == 0 || rows == 0 {
            return Err(TerminalError::InvalidDimensions { width: cols, height: rows });
        }
        self.executor.resize(Size::new(cols, rows));
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = &self.executor.state;
        let size = state.size();
        Snapshot {
            size,
            lines: state.active_buffer().lines().to_vec(),
            cursor: self.cursor(),
            title: state.title.clone(),
            bracketed_paste: state.modes.get(Mode::BracketedPaste),
            mouse_reporting: state.modes.any_mouse_reporting(),
            alternate_screen_active: state.alternate.is_some(),
            default_style: state.active_style,
        }
    }

    /// Diff the active grid against the grid captured at the last
    /// `take_damage` call (or construction) and return merged damage
    /// regions. Resetting the baseline here keeps the diff strictly
    /// incremental between calls, per §4.I.
    pub fn take_damage(&mut self) -> Vec<Region> {
        let current = self.executor.state.active_buffer().lines();
        let regions = if current.len() == self.previous_snapshot_lines.len() {
            diff_grid(&self.previous_snapshot_lines, current)
        } else {
            // Dimensions changed since the last diff: treat the whole grid
            // as damaged rather than compare mismatched geometries.
            current
                .iter()
                .enumerate()
                .map(|(row, line)| {
                    Region::new(row as u16, 0, line.width() as u16, vtcore_types::DamageKind::Structural)
                })
                .collect()
        };
        self.previous_snapshot_lines = current.to_vec();
        regions
    }

    pub fn cursor(&self) -> CursorState {
        let state = &self.executor.state;
        CursorState {
            position: state.cursor.position(),
            visible: state.cursor.is_visible() && state.modes.get(Mode::CursorVisible),
            style: state.cursor_style,
            pending_wrap: state.cursor.pending_wrap(),
        }
    }

    pub fn mode(&self, mode: Mode) -> bool {
        self.executor.state.modes.get(mode)
    }

    pub fn size(&self) -> Size {
        self.executor.state.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(cols: u16, rows: u16) -> TerminalConfig {
        TerminalConfig::new(cols, rows)
            .with_callbacks(Callbacks::new().with_device_response(Box::new(|_| {})))
    }

    #[test]
    fn feed_returns_full_byte_count() {
        let mut terminal = Terminal::new(test_config(10, 3)).unwrap();
        assert_eq!(terminal.feed(b"hello"), 5);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let result = Terminal::new(test_config(0, 3));
        assert!(result.is_err());
    }

    #[test]
    fn missing_device_response_callback_is_rejected() {
        let result = Terminal::new(TerminalConfig::new(10, 3));
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_reflects_written_text() {
        let mut terminal = Terminal::new(test_config(10, 3)).unwrap();
        terminal.feed(b"hi");
        let snapshot = terminal.snapshot();
        assert_eq!(snapshot.lines[0].cells[0].cluster, "h");
    }

    #[test]
    fn take_damage_is_empty_on_repeated_calls_with_no_writes() {
        let mut terminal = Terminal::new(test_config(10, 3)).unwrap();
        terminal.feed(b"hi");
        let _ = terminal.take_damage();
        assert!(terminal.take_damage().is_empty());
    }

    #[test]
    fn take_damage_reports_changed_cells() {
        let mut terminal = Terminal::new(test_config(10, 3)).unwrap();
        let _ = terminal.take_damage();
        terminal.feed(b"hi");
        let regions = terminal.take_damage();
        assert!(!regions.is_empty());
    }

    #[test]
    fn resize_reflows_and_keeps_feeding_bytes() {
        let mut terminal = Terminal::new(test_config(5, 3)).unwrap();
        terminal.feed(b"hello");
        terminal.resize(10, 3).unwrap();
        assert_eq!(terminal.size(), Size::new(10, 3));
    }
}
