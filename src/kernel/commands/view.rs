//! View and application-level commands.

use super::HandlerFuture;
use crate::kernel::dialog::DialogCoordinator;
use crate::kernel::overlay::FocusTarget;
use crate::kernel::workspace::{SharedWorkspace, Workspace};

pub fn toggle_status_bar(workspace: &mut Workspace) {
    let visible = workspace.session.toggle_status_bar();
    tracing::debug!(visible, "status bar toggled");
}

pub fn toggle_menu_focus(workspace: &mut Workspace) {
    let target = match workspace.focus() {
        FocusTarget::MenuBar => FocusTarget::Editor,
        _ => FocusTarget::MenuBar,
    };
    if workspace.search.is_active() {
        workspace.search.cancel();
    }
    workspace.overlays.set_focus(target);
}

pub fn quit(workspace: &mut Workspace) {
    workspace.request_quit();
}

pub fn about_text() -> String {
    format!(
        "{} {}\nA small modal text editor for the terminal.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

pub fn about(workspace: SharedWorkspace) -> HandlerFuture {
    Box::pin(async move {
        DialogCoordinator::new(&workspace)
            .show_message("About", about_text())
            .await;
    })
}
