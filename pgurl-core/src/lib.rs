pub mod clipboard;
pub mod config;
pub mod connection;
pub mod errors;

pub use clipboard::{copy_to_clipboard, ClipboardWriter, CopyFeedback, COPIED_RESET_DELAY};
pub use config::Config;
pub use connection::{compose, ConnectionFields, ConnectionString, FieldKind};
