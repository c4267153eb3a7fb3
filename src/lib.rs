//! Editing core of a terminal multi-line text view
//!
//! This crate provides the line buffer, cursor/selection model, kill-ring
//! clipboard protocol and line-range undo history behind a text view,
//! driven by key-neutral messages in the Elm Architecture style.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigError, TextViewConfig};
pub use editable::{
    ClipboardService, EditConstraints, MoveTarget, Position, Selection, SharedClipboard,
    SystemClipboard, TextEditMsg, TextEditor,
};
pub use update::update_text_edit;
pub use util::LoadError;
