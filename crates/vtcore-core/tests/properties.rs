//! Property-based tests for the universal invariants (split-feed
//! determinism, empty self-diff, resize idempotence, RIS equivalence,
//! wide-cell pairing, scrollback capacity bound).

use proptest::prelude::*;
use vtcore_core::damage::diff_grid;
use vtcore_core::{Callbacks, Terminal, TerminalConfig};

const PRINTABLE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \r\n\t";

fn config(cols: u16, rows: u16) -> TerminalConfig {
    TerminalConfig::new(cols, rows).with_callbacks(Callbacks::new().with_device_response(Box::new(|_| {})))
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop_oneof![
        proptest::sample::select(PRINTABLE.as_bytes().to_vec()),
        Just(0x1b_u8), // occasionally seed an escape byte
    ], 0..200)
}

proptest! {
    /// Feeding a byte stream whole, versus feeding it split arbitrarily
    /// across multiple `feed()` calls, must produce the same final grid.
    #[test]
    fn split_feed_is_deterministic(data in arb_bytes(), split in 0usize..200) {
        let mut whole = Terminal::new(config(20, 6)).unwrap();
        whole.feed(&data);

        let mut split_terminal = Terminal::new(config(20, 6)).unwrap();
        let cut = split.min(data.len());
        split_terminal.feed(&data[..cut]);
        split_terminal.feed(&data[cut..]);

        prop_assert_eq!(whole.snapshot().lines, split_terminal.snapshot().lines);
        prop_assert_eq!(whole.snapshot().cursor, split_terminal.snapshot().cursor);
    }

    /// Diffing a grid against itself always yields no damage.
    #[test]
    fn diffing_grid_against_itself_is_empty(data in arb_bytes()) {
        let mut terminal = Terminal::new(config(20, 6)).unwrap();
        terminal.feed(&data);
        let lines = terminal.snapshot().lines;
        prop_assert!(diff_grid(&lines, &lines).is_empty());
    }

    /// Resizing to a width and back to the original width preserves every
    /// non-blank glyph's row/col-independent reading order (reflow is
    /// lossless for short single-line content).
    #[test]
    fn resize_round_trip_preserves_short_content(word in "[a-zA-Z]{1,10}") {
        let mut terminal = Terminal::new(config(20, 6)).unwrap();
        terminal.feed(word.as_bytes());
        let before = terminal.snapshot().lines[0].cells[..word.len()]
            .iter().map(|c| c.cluster.clone()).collect::<Vec<_>>();

        terminal.resize(40, 6).unwrap();
        terminal.resize(20, 6).unwrap();

        let after = terminal.snapshot().lines[0].cells[..word.len()]
            .iter().map(|c| c.cluster.clone()).collect::<Vec<_>>();
        prop_assert_eq!(before, after);
    }

    /// A wide cell is always immediately followed by a continuation
    /// sentinel sharing its style, no matter what precedes it — including a
    /// 19-char prefix that lands the wide cluster exactly on the last
    /// column of a 20-col terminal, where it must force a wrap first.
    #[test]
    fn wide_cells_keep_their_continuation_pair(prefix in "[a-zA-Z ]{0,19}") {
        let mut terminal = Terminal::new(config(20, 3)).unwrap();
        let mut input = prefix.clone().into_bytes();
        input.extend_from_slice("\u{4f60}".as_bytes());
        terminal.feed(&input);

        for line in &terminal.snapshot().lines {
            for (idx, cell) in line.cells.iter().enumerate() {
                if cell.width == 2 {
                    let next = line.cells.get(idx + 1);
                    prop_assert!(next.map(|c| c.is_continuation()).unwrap_or(false));
                    prop_assert_eq!(next.unwrap().style, cell.style);
                }
            }
        }
    }
}

#[test]
fn ris_resets_to_the_same_state_as_a_fresh_terminal() {
    let mut terminal = Terminal::new(config(10, 4)).unwrap();
    terminal.feed(b"\x1b[1;31mhello\x1b[2;2H\x1b[?1049h");
    terminal.feed(b"\x1bc");

    let fresh = Terminal::new(config(10, 4)).unwrap();
    assert_eq!(terminal.snapshot().lines, fresh.snapshot().lines);
    assert_eq!(terminal.snapshot().cursor, fresh.snapshot().cursor);
    assert_eq!(terminal.snapshot().alternate_screen_active, fresh.snapshot().alternate_screen_active);
}

#[test]
fn scrollback_growth_is_bounded_by_configured_capacity() {
    let mut terminal =
        Terminal::new(config(10, 2).with_scrollback_capacity(5)).unwrap();
    for _ in 0..50 {
        terminal.feed(b"line\r\n");
    }
    // Damage accounting aside, the facade never exposes scrollback directly;
    // this exercises that 50 newlines against a 5-line cap doesn't panic or
    // grow unbounded internal state (observable indirectly via repeated feeds
    // completing in bounded time).
    assert_eq!(terminal.size().rows, 2);
}
