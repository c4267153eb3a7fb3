//! Clipboard access and kill-ring discipline.
//!
//! The register itself lives outside the editor ([`ClipboardService`]); the
//! editor only tracks whether the previous operation was a kill, so that
//! consecutive kills accumulate into one register entry.

use std::cell::RefCell;
use std::rc::Rc;

/// Errors reported by a clipboard backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Backend could not be opened (no display server, sandbox, ...)
    Unavailable(String),
    /// Backend was opened but reading or writing failed
    Access(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "clipboard unavailable: {}", msg),
            Self::Access(msg) => write!(f, "clipboard access failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// The external shared register. Plain Unicode text only.
pub trait ClipboardService: std::fmt::Debug {
    fn get(&mut self) -> Result<String, ClipboardError>;
    fn set(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// Operating system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn get(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // An empty or non-text register reads as empty text
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Access(e.to_string())),
        }
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// In-process register. Clones share the same content, so several editors
/// built from clones of one `SharedClipboard` see each other's cuts.
#[derive(Debug, Default, Clone)]
pub struct SharedClipboard {
    content: Rc<RefCell<String>>,
}

impl SharedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            content: Rc::new(RefCell::new(text.to_string())),
        }
    }

    /// Current register content
    pub fn contents(&self) -> String {
        self.content.borrow().clone()
    }
}

impl ClipboardService for SharedClipboard {
    fn get(&mut self) -> Result<String, ClipboardError> {
        Ok(self.content.borrow().clone())
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        *self.content.borrow_mut() = text;
        Ok(())
    }
}

/// Direction of the kill that started or continued a kill sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillDirection {
    Forward,
    Backward,
}

/// Two-state kill-sequence machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KillState {
    /// The next kill replaces the register
    #[default]
    Fresh,
    /// The previous operation was a kill (or cut); the next kill appends
    Continuing { last: KillDirection },
}

/// Kill-ring protocol over a [`ClipboardService`].
///
/// Backend failures are logged and never abort the buffer edit that
/// triggered them; a failed read is treated as an empty register.
#[derive(Debug)]
pub struct KillRing {
    service: Box<dyn ClipboardService>,
    state: KillState,
}

impl KillRing {
    pub fn new(service: Box<dyn ClipboardService>) -> Self {
        Self {
            service,
            state: KillState::Fresh,
        }
    }

    pub fn state(&self) -> KillState {
        self.state
    }

    /// End the current kill sequence (any non-kill mutation)
    pub fn reset(&mut self) {
        self.state = KillState::Fresh;
    }

    /// Register content, empty on backend failure
    pub fn contents(&mut self) -> String {
        self.service.get().unwrap_or_else(|e| {
            tracing::warn!("Failed to read clipboard: {}", e);
            String::new()
        })
    }

    /// Copy: replace the register; kill state is left as is
    pub fn copy(&mut self, text: String) {
        self.write(text);
    }

    /// Cut: replace the register and start a kill sequence
    pub fn cut(&mut self, text: String) {
        self.write(text);
        self.state = KillState::Continuing {
            last: KillDirection::Forward,
        };
    }

    /// Kill: append to the end of the register when continuing a sequence,
    /// regardless of direction; otherwise replace it.
    pub fn kill(&mut self, text: String, direction: KillDirection) {
        let text = match self.state {
            KillState::Continuing { .. } => {
                let mut current = self.contents();
                current.push_str(&text);
                current
            }
            KillState::Fresh => text,
        };
        tracing::trace!(?direction, len = text.len(), "kill");
        self.write(text);
        self.state = KillState::Continuing { last: direction };
    }

    fn write(&mut self, text: String) {
        if let Err(e) = self.service.set(text) {
            tracing::warn!("Failed to write clipboard: {}", e);
        }
    }
}
