//! Terminal core: screen buffer, cursor/attribute state, command executor,
//! and render diff/damage tracking, built on `vtcore-types` (leaf value
//! types) and `vtcore-parser` (the ANSI/VT byte-stream parser). No PTY, no
//! async runtime, no interactive input handling - a host drives this
//! synchronously from its own event loop (§5).

pub mod buffer;
pub mod charset;
pub mod config;
pub mod cursor;
pub mod damage;
pub mod executor;
pub mod hyperlink;
pub mod sgr;
pub mod state;
pub mod terminal;

pub use config::{Callbacks, DcsChunk, TerminalConfig};
pub use terminal::Terminal;
pub use vtcore_types::{
    CursorShape, CursorState, CursorStyle, DamageKind, Mode, Region, Result, Size, Snapshot, TerminalError,
};
