//! Terminal construction surface (component J support): dimensions,
//! scrollback capacity, and the callback table a host wires up for title
//! changes, bell, hyperlink hover, clipboard access, and DCS passthrough.
//! Generalizes the teacher's ad hoc constructor arguments into one
//! validated config, in the spirit of `phosphor_core`'s builder-style setup.

use vtcore_types::{DcsHook, Result, TerminalError};

/// A chunk of a streamed DCS payload (Sixel, DECRQSS, termcap query), handed
/// to the passthrough sink as it arrives.
pub enum DcsChunk {
    Hook(DcsHook),
    Put(u8),
    Unhook,
}

/// Host-provided side-effect hooks. Every field but `on_device_response` is
/// optional; an absent optional callback means the corresponding OSC/DCS
/// request is acknowledged internally (state updates) but produces no
/// external effect — e.g. OSC 52 is a no-op without `clipboard` wired up, per
/// the open question this resolves. A DCS payload with no sink wired is
/// counted (`TerminalState::dcs_bytes_discarded`) and dropped.
///
/// `on_device_response` delivers DSR/DA/DECRQSS replies and OSC 52 read
/// results; spec §6 requires it be deliverable for interactive correctness,
/// so `TerminalConfig::validate` rejects a config missing it rather than
/// letting replies silently vanish. Wire `Box::new(|_| {})` to explicitly
/// discard them.
#[derive(Default)]
pub struct Callbacks {
    pub on_title_changed: Option<Box<dyn FnMut(&str) + Send>>,
    pub on_bell: Option<Box<dyn FnMut() + Send>>,
    pub on_clipboard_write: Option<Box<dyn FnMut(vtcore_types::ClipboardSelection, &str) + Send>>,
    pub on_clipboard_read: Option<Box<dyn FnMut(vtcore_types::ClipboardSelection) -> Option<String> + Send>>,
    pub on_dcs_sink: Option<Box<dyn FnMut(DcsChunk) + Send>>,
    pub on_device_response: Option<Box<dyn FnMut(&[u8]) + Send>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device_response(mut self, cb: Box<dyn FnMut(&[u8]) + Send>) -> Self {
        self.on_device_response = Some(cb);
        self
    }
}

pub struct TerminalConfig {
    pub cols: u16,
    pub rows: u16,
    pub scrollback_capacity: usize,
    pub callbacks: Callbacks,
}

impl TerminalConfig {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows, scrollback_capacity: 10_000, callbacks: Callbacks::new() }
    }

    pub fn with_scrollback_capacity(mut self, capacity: usize) -> Self {
        self.scrollback_capacity = capacity;
        self
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(TerminalError::InvalidDimensions { width: self.cols, height: self.rows });
        }
        if self.callbacks.on_device_response.is_none() {
            return Err(TerminalError::MissingRequiredCallback { name: "on_device_response" });
        }
        Ok(())
    }
}
