//! File menu: new, open (with create-on-missing), save, save as.

use super::HandlerFuture;
use crate::kernel::dialog::{DialogCoordinator, DialogRequest};
use crate::kernel::services::file::{self, FileError};
use crate::kernel::workspace::{SharedWorkspace, Workspace};
use std::path::PathBuf;

/// Answers to the create prompt that count as "yes" (compared lowercase).
const CREATE_ANSWERS: [&str; 5] = ["y", "yes", "ye", "yse", ""];

pub fn new_file(workspace: &mut Workspace) {
    workspace.document.reset("");
    workspace.session.current_path = None;
    tracing::info!("new document");
}

pub fn open_file(workspace: SharedWorkspace) -> HandlerFuture {
    Box::pin(async move { run_open(&workspace).await })
}

pub async fn run_open(workspace: &SharedWorkspace) {
    let dialogs = DialogCoordinator::new(workspace);
    let request = DialogRequest::path_input("Open file", "Enter the path of a file:");
    let Some(path) = dialogs.show(request).await.value else {
        return;
    };
    open_path(workspace, PathBuf::from(path)).await;
}

/// Reads `path` into the document. A missing file leads to the create prompt.
pub async fn open_path(workspace: &SharedWorkspace, path: PathBuf) {
    match file::read_text_lossy(&path) {
        Ok(text) => {
            tracing::info!(path = %path.display(), bytes = text.len(), "file opened");
            let mut ws = workspace.borrow_mut();
            ws.document.reset(&text);
            ws.session.current_path = Some(path);
        }
        Err(err) if err.is_not_found() => confirm_create(workspace, path, err).await,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "open failed");
            DialogCoordinator::new(workspace)
                .show_message("Error", err.to_string())
                .await;
        }
    }
}

async fn confirm_create(workspace: &SharedWorkspace, path: PathBuf, not_found: FileError) {
    let dialogs = DialogCoordinator::new(workspace);
    let request = DialogRequest::text_input(
        "Problem while opening the file",
        "The file doesn't exist, do you want to create it? (Y/n):",
    );
    let Some(answer) = dialogs.show(request).await.value else {
        return;
    };

    if !CREATE_ANSWERS.contains(&answer.trim().to_lowercase().as_str()) {
        dialogs.show_message("Error", not_found.to_string()).await;
        return;
    }

    match file::create_empty(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "file created");
            let mut ws = workspace.borrow_mut();
            ws.document.reset("");
            ws.session.status_created(&path);
            ws.session.current_path = Some(path);
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "create failed");
            dialogs.show_message("Error", err.to_string()).await;
        }
    }
}

/// Writes to the current path. Without one this does nothing.
pub fn save(workspace: &mut Workspace) {
    let Some(path) = workspace.session.current_path.clone() else {
        tracing::debug!("save without a path ignored");
        return;
    };

    let document = &workspace.document;
    match file::write_with(&path, |w| document.write_to(w)) {
        Ok(bytes) => {
            tracing::info!(path = %path.display(), bytes, "file saved");
            workspace.session.status_written(bytes);
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "save failed");
            workspace.notify(DialogRequest::message("Error", err.to_string()));
        }
    }
}

pub fn save_as(workspace: SharedWorkspace) -> HandlerFuture {
    Box::pin(async move { run_save_as(&workspace).await })
}

pub async fn run_save_as(workspace: &SharedWorkspace) {
    let dialogs = DialogCoordinator::new(workspace);
    let request = DialogRequest::path_input("Save as file", "Enter the path of the new file:");
    let Some(path) = dialogs.show(request).await.value else {
        return;
    };
    let path = PathBuf::from(path);

    let written = {
        let ws = workspace.borrow();
        let document = &ws.document;
        file::write_with(&path, |w| document.write_to(w))
    };

    match written {
        Ok(bytes) => {
            tracing::info!(path = %path.display(), bytes, "file saved as");
            let mut ws = workspace.borrow_mut();
            ws.session.status_written_new(bytes, &path);
            ws.session.current_path = Some(path);
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "save as failed");
            dialogs.show_message("Error", err.to_string()).await;
        }
    }
}
