use crate::charset::{CharsetSlot, CharsetTable};
use crate::color::Color;
use crate::modes::Mode;
use crate::style::UnderlineStyle;

/// Events produced by the parser (component F) and consumed by the command
/// executor (component G). One byte never produces more than one logical
/// event, except `Print`, which batches contiguous printable clusters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEvent {
    /// One or more printable grapheme clusters, already UTF-8 decoded.
    Print(String),
    /// A single C0/C1 control byte.
    Control(ControlCode),
    Csi(CsiEvent),
    Osc(OscEvent),
    Esc(EscEvent),
    /// DCS payload delivered as it streams in (Sixel, DECRQSS, termcap).
    DcsHook(DcsHook),
    DcsPut(u8),
    DcsUnhook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    Bell,
    Backspace,
    Tab,
    LineFeed,
    VerticalTab,
    FormFeed,
    CarriageReturn,
    ShiftOut,
    ShiftIn,
}

/// CSI-introduced sequences, decomposed into concrete variants rather than
/// one generic `{params, intermediates, final}` struct: this consolidates
/// the teacher's per-final dispatch while staying exhaustively matched
/// (§9's "pattern-match tables scattered across handlers" redesign note).
#[derive(Debug, Clone, PartialEq)]
pub enum CsiEvent {
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    CursorNextLine(u16),
    CursorPreviousLine(u16),
    CursorColumn(u16),
    CursorRow(u16),
    CursorPosition { row: u16, col: u16 },

    EraseDisplay(EraseMode),
    EraseLine(EraseMode),

    InsertChars(u16),
    DeleteChars(u16),
    EraseChars(u16),
    InsertLines(u16),
    DeleteLines(u16),

    ScrollUp(u16),
    ScrollDown(u16),
    SetScrollRegion { top: Option<u16>, bottom: Option<u16> },
    SetLeftRightMargin { left: Option<u16>, right: Option<u16> },

    SetGraphicsRendition(Vec<SgrParam>),

    SaveCursor,
    RestoreCursor,

    SetMode(Vec<Mode>),
    ResetMode(Vec<Mode>),

    HorizontalTabSet,
    TabClear(TabClearMode),
    CursorForwardTab(u16),
    CursorBackTab(u16),

    PrimaryDeviceAttributes,
    SecondaryDeviceAttributes,
    DeviceStatusReport(DeviceStatusQuery),

    /// DECSTR (`CSI ! p`) - soft reset: cursor, modes, and margins, but not
    /// the screen contents.
    SoftReset,
    /// DECSCUSR (`CSI Ps SP q`) - cursor shape/blink hint for the renderer.
    SetCursorStyle(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    Below,
    Above,
    All,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClearMode {
    Current,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatusQuery {
    OperatingStatus,
    CursorPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrParam {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline(UnderlineStyle),
    BlinkSlow,
    BlinkFast,
    Reverse,
    Hidden,
    Strikethrough,

    NoBold,
    NoDim,
    NoItalic,
    NoUnderline,
    NoBlink,
    NoReverse,
    NoHidden,
    NoStrikethrough,

    Foreground(Color),
    Background(Color),
    UnderlineColor(Color),

    DefaultForeground,
    DefaultBackground,
    DefaultUnderlineColor,
}

/// Operating System Command sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum OscEvent {
    SetTitle(String),
    SetIconName(String),
    SetHyperlink { id: Option<String>, uri: String },
    ResetHyperlink,
    SetPaletteColor { index: u8, color: Color },
    ResetPaletteColor(u8),
    SetForegroundColor(Color),
    SetBackgroundColor(Color),
    SetCursorColor(Color),
    Clipboard { selection: ClipboardSelection, payload: ClipboardPayload },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardSelection {
    Clipboard,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    /// `?` — caller should respond with the current contents.
    Query,
    /// base64-encoded payload to install.
    Set(String),
    /// empty payload — clear the selection.
    Clear,
}

/// ESC-introduced sequences (no CSI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscEvent {
    Index,
    NextLine,
    TabSet,
    ReverseIndex,
    KeypadApplicationMode,
    KeypadNumericMode,
    SaveCursor,
    RestoreCursor,
    ResetToInitialState,
    SingleShift2,
    SingleShift3,
    DesignateCharset { slot: CharsetSlot, table: CharsetTable },
}

/// Streamed DCS payload hook (Sixel, DECRQSS, termcap queries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcsHook {
    pub params: Vec<Vec<u16>>,
    pub intermediates: Vec<u8>,
    pub private: Option<u8>,
    pub final_byte: u8,
}

/// Per-kind occurrence counters for malformed/unrecognized input, exposed
/// for observability without being part of the main API (§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserStats {
    pub invalid_utf8: u64,
    pub unknown_csi: u64,
    pub unknown_osc: u64,
    pub unknown_esc: u64,
    pub oversized_params: u64,
}
