//! OS-facing adapters used by the command handlers.

pub mod file;
pub mod settings;

pub use file::FileError;
pub use settings::{KeybindingRule, Settings};
