//! Leaf value types shared between the ANSI parser and the terminal core:
//! cells, colors, styles, geometry, modes, parser events, and damage
//! records. No behavior lives here beyond small, total conversions.

pub mod cell;
pub mod charset;
pub mod color;
pub mod damage;
pub mod error;
pub mod events;
pub mod geometry;
pub mod modes;
pub mod snapshot;
pub mod style;

pub use cell::{Cell, Line};
pub use charset::{CharsetSlot, CharsetTable};
pub use color::{Color, Palette};
pub use damage::{AttrChange, DamageKind, Node, Region, TreeDiff, TreePath};
pub use error::{Result, TerminalError};
pub use events::{
    ClipboardPayload, ClipboardSelection, ControlCode, CsiEvent, DcsHook, DeviceStatusQuery,
    EraseMode, EscEvent, OscEvent, ParsedEvent, ParserStats, SgrParam, TabClearMode,
};
pub use geometry::{HorizontalMargin, Position, Size, VerticalMargin};
pub use modes::{Mode, Modes};
pub use snapshot::{CursorShape, CursorState, CursorStyle, Snapshot};
pub use style::{AttributeFlags, HyperlinkId, Style, UnderlineStyle};
