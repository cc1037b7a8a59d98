//! Process-wide session state: current file, status line text, status bar visibility.

use crate::models::TextBuffer;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATUS: &str = " Press Ctrl-E to open menu. ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_path: Option<PathBuf>,
    pub status_text: String,
    pub status_bar_visible: bool,
}

impl SessionState {
    pub fn new(status_bar_visible: bool) -> Self {
        Self {
            current_path: None,
            status_text: DEFAULT_STATUS.to_string(),
            status_bar_visible,
        }
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }

    pub fn toggle_status_bar(&mut self) -> bool {
        self.status_bar_visible = !self.status_bar_visible;
        self.status_bar_visible
    }

    pub fn status_written(&mut self, bytes: usize) {
        self.set_status(format!("Press Ctrl-E to open menu, {bytes}B written. "));
    }

    pub fn status_written_new(&mut self, bytes: usize, path: &Path) {
        self.set_status(format!(
            "Press Ctrl-E to open menu, {bytes}B written, New file created: '{}'. ",
            path.display()
        ));
    }

    pub fn status_created(&mut self, path: &Path) {
        self.set_status(format!(
            "Press Ctrl-E to open menu, new file created: '{}'.",
            path.display()
        ));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Right-hand status segment: 1-based `row:col` of the cursor.
pub fn cursor_label(document: &TextBuffer) -> String {
    let (row, col) = document.cursor_row_col();
    format!("{}:{}", row + 1, col + 1)
}
