//! Headless core: overlays, dialogs, commands and the state they act on.

pub mod clipboard;
pub mod commands;
pub mod dialog;
pub mod keybinding;
pub mod line_input;
pub mod overlay;
pub mod path_complete;
pub mod search;
pub mod services;
pub mod session;
pub mod workspace;

pub use commands::{CommandTable, Handler};
pub use dialog::{DialogCoordinator, DialogRequest, DialogResult, DialogView};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use overlay::{FocusTarget, OverlayId, OverlayStack};
pub use session::SessionState;
pub use workspace::{SharedWorkspace, Workspace};
