//! Edit menu and editor-local commands.

use super::HandlerFuture;
use crate::kernel::dialog::{DialogCoordinator, DialogRequest};
use crate::kernel::overlay::FocusTarget;
use crate::kernel::workspace::{SharedWorkspace, Workspace};

pub const TIME_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn undo(workspace: &mut Workspace) {
    if !workspace.document.undo() {
        tracing::debug!("undo history empty");
    }
}

pub fn cut(workspace: &mut Workspace) {
    if let Some(text) = workspace.document.cut_selection() {
        workspace.clipboard.set_text(text);
    }
}

pub fn copy(workspace: &mut Workspace) {
    if let Some(text) = workspace.document.copy_selection() {
        workspace.clipboard.set_text(text);
    }
}

pub fn paste(workspace: &mut Workspace) {
    if let Some(text) = workspace.clipboard.text() {
        workspace.document.insert_text(text);
    }
}

/// Removes the selection without touching the clipboard.
pub fn delete(workspace: &mut Workspace) {
    workspace.document.delete_selection();
}

pub fn select_all(workspace: &mut Workspace) {
    workspace.document.select_all();
}

pub fn insert_time_date(workspace: &mut Workspace) {
    let now = chrono::Local::now().format(TIME_DATE_FORMAT).to_string();
    workspace.document.insert_text(&now);
}

pub fn insert_tab(workspace: &mut Workspace) {
    let indent = " ".repeat(workspace.tab_size());
    workspace.document.insert_text(&indent);
}

/// Drops one indent level, only when the text before the cursor ends with it.
pub fn remove_leading_tab(workspace: &mut Workspace) {
    let width = workspace.tab_size();
    let indent = " ".repeat(width);
    if workspace.document.line_before_cursor().ends_with(&indent) {
        workspace.document.delete_before_cursor(width);
    }
}

pub fn find(workspace: &mut Workspace) {
    workspace.search.activate();
    workspace.overlays.set_focus(FocusTarget::SearchBar);
}

pub fn find_next(workspace: &mut Workspace) {
    if !workspace.search.find_next(&mut workspace.document) {
        tracing::debug!(term = ?workspace.search.term(), "find next: no match");
    }
}

pub fn replace(_workspace: &mut Workspace) {
    tracing::debug!("replace is not available");
}

pub fn go_to_line(workspace: SharedWorkspace) -> HandlerFuture {
    Box::pin(async move { run_go_to_line(&workspace).await })
}

pub async fn run_go_to_line(workspace: &SharedWorkspace) {
    let dialogs = DialogCoordinator::new(workspace);
    let request = DialogRequest::text_input("Go to line", "Line number:");
    let Some(input) = dialogs.show(request).await.value else {
        return;
    };

    let line = match input.trim().parse::<i64>() {
        Ok(line) => line,
        Err(_) => {
            dialogs
                .show_message(
                    "Invalid line number",
                    format!("'{}' is not a line number.", input.trim()),
                )
                .await;
            return;
        }
    };

    let row = usize::try_from(line.saturating_sub(1)).unwrap_or(0);
    let mut ws = workspace.borrow_mut();
    let offset = ws.document.row_col_to_char(row, 0);
    ws.document.clear_selection();
    ws.document.set_cursor(offset);
}
