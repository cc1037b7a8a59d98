//! Terminal integration (crossterm): screen setup/restore and signals.

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminationFlag, TerminationSignal};
