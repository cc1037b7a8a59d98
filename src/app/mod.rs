//! Application runtime: key routing, menu bar, rendering and the event loop.

mod event_loop;
mod input;
pub mod menu;
mod mouse;
mod render;
mod util;

pub use event_loop::run;
pub use menu::{MenuBar, MenuItem, MenuOutcome};

use crate::core::Command;
use crate::kernel::commands::CommandTable;
use crate::kernel::dialog::DialogFocus;
use crate::kernel::keybinding::KeybindingService;
use crate::kernel::overlay::FocusTarget;
use crate::kernel::services::Settings;
use crate::kernel::workspace::{SharedWorkspace, Workspace};
use ratatui::layout::Rect;
use tokio::task::JoinHandle;

/// Scroll state of the editor area, updated on every draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorViewport {
    pub scroll_row: usize,
    pub scroll_col: usize,
    pub height: usize,
}

/// Clickable regions from the last draw.
#[derive(Debug, Clone, Default)]
struct HitRegions {
    menu_titles: Vec<Rect>,
    /// Inner area of the open dropdown, one row per item.
    dropdown: Option<Rect>,
    /// Text cells of the editor, without gutter and scrollbar.
    editor: Rect,
    /// Buttons of the topmost dialog.
    dialog_buttons: Vec<(DialogFocus, Rect)>,
}

pub struct App {
    workspace: SharedWorkspace,
    commands: CommandTable,
    keybindings: KeybindingService,
    menu: MenuBar,
    viewport: EditorViewport,
    hits: HitRegions,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self::with_workspace(
            Workspace::new(settings).shared(),
            KeybindingService::with_rules(&settings.keybindings),
        )
    }

    pub fn with_workspace(workspace: SharedWorkspace, keybindings: KeybindingService) -> Self {
        Self {
            workspace,
            commands: CommandTable::new(),
            keybindings,
            menu: MenuBar::new(),
            viewport: EditorViewport::default(),
            hits: HitRegions::default(),
        }
    }

    pub fn workspace(&self) -> &SharedWorkspace {
        &self.workspace
    }

    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    pub fn viewport(&self) -> EditorViewport {
        self.viewport
    }

    pub fn should_quit(&self) -> bool {
        self.workspace.borrow().should_quit()
    }

    /// Runs `command` through the command table. Must be called inside a `LocalSet`.
    pub fn run_command(&mut self, command: Command) -> Option<JoinHandle<()>> {
        let handle = self.commands.dispatch(command, &self.workspace);
        if command == Command::ToggleMenuFocus
            && self.workspace.borrow().focus() == FocusTarget::MenuBar
        {
            self.menu.reset_item();
        }
        handle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
