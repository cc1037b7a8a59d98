//! Modal dialogs and the coordinator that awaits them.
//!
//! A handler calls [`DialogCoordinator::show`], which pushes a [`DialogView`] onto the
//! overlay stack and parks the handler on a oneshot receiver. The event loop feeds keys
//! to the top dialog; accepting or cancelling fires the sender exactly once, the handler
//! resumes, and the coordinator pops the overlay.

use crate::core::event::{Key, KeyCode};
use crate::kernel::line_input::LineInput;
use crate::kernel::path_complete;
use crate::kernel::workspace::SharedWorkspace;
use std::fmt;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    FreeText,
    PathText,
    /// Message only: no input field, no Cancel button.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub prompt_label: String,
    pub initial_value: Option<String>,
    pub input_kind: InputKind,
}

impl DialogRequest {
    pub fn text_input(title: impl Into<String>, prompt_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt_label: prompt_label.into(),
            initial_value: None,
            input_kind: InputKind::FreeText,
        }
    }

    pub fn path_input(title: impl Into<String>, prompt_label: impl Into<String>) -> Self {
        Self {
            input_kind: InputKind::PathText,
            ..Self::text_input(title, prompt_label)
        }
    }

    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            input_kind: InputKind::None,
            ..Self::text_input(title, text)
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn has_input(&self) -> bool {
        self.input_kind != InputKind::None
    }
}

/// `value == None` means the user cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogResult {
    pub value: Option<String>,
}

impl DialogResult {
    pub fn cancelled() -> Self {
        Self { value: None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    AlreadyResolved,
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::AlreadyResolved => write!(f, "dialog already resolved"),
        }
    }
}

impl std::error::Error for DialogError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    Input,
    Ok,
    Cancel,
}

/// Live state of one dialog on the overlay stack.
#[derive(Debug)]
pub struct DialogView {
    request: DialogRequest,
    input: LineInput,
    focus: DialogFocus,
    resolver: Option<oneshot::Sender<Option<String>>>,
}

impl DialogView {
    pub fn new(request: DialogRequest, resolver: oneshot::Sender<Option<String>>) -> Self {
        let input = LineInput::new(request.initial_value.clone().unwrap_or_default());
        let focus = if request.has_input() {
            DialogFocus::Input
        } else {
            DialogFocus::Ok
        };
        Self {
            request,
            input,
            focus,
            resolver: Some(resolver),
        }
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn focus(&self) -> DialogFocus {
        self.focus
    }

    pub fn is_resolved(&self) -> bool {
        self.resolver.is_none()
    }

    /// Focus ring in Tab order.
    pub fn focus_ring(&self) -> &'static [DialogFocus] {
        if self.request.has_input() {
            &[DialogFocus::Input, DialogFocus::Ok, DialogFocus::Cancel]
        } else {
            &[DialogFocus::Ok]
        }
    }

    pub fn resolve(&mut self, value: Option<String>) -> Result<(), DialogError> {
        let Some(resolver) = self.resolver.take() else {
            tracing::error!(title = %self.request.title, "second resolution of a dialog");
            return Err(DialogError::AlreadyResolved);
        };
        tracing::debug!(
            title = %self.request.title,
            cancelled = value.is_none(),
            "dialog resolved"
        );
        // A dropped receiver means the awaiting handler is gone; nothing left to notify.
        let _ = resolver.send(value);
        Ok(())
    }

    /// OK: text dialogs yield their input, message dialogs an empty acknowledgement.
    pub fn accept(&mut self) -> Result<(), DialogError> {
        let value = if self.request.has_input() {
            self.input.value().to_string()
        } else {
            String::new()
        };
        self.resolve(Some(value))
    }

    pub fn cancel(&mut self) -> Result<(), DialogError> {
        self.resolve(None)
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// Inserts pasted text at the input cursor; ignored once resolved or off the input.
    pub fn paste(&mut self, text: &str) {
        if !self.is_resolved() && self.focus == DialogFocus::Input {
            self.input.insert_str(text);
        }
    }

    /// Routes one key press. Returns `false` once the dialog has been resolved: input is
    /// disabled from that point on.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.is_resolved() {
            return false;
        }

        match key.code {
            KeyCode::Esc => self.activate(DialogFocus::Cancel),
            KeyCode::Enter => self.activate(self.focus),
            KeyCode::Tab => {
                if !self.try_complete_path() {
                    self.cycle_focus(1);
                }
            }
            KeyCode::BackTab => self.cycle_focus(-1),
            _ if self.focus == DialogFocus::Input => self.edit_input(key),
            KeyCode::Left | KeyCode::Up => self.cycle_focus(-1),
            KeyCode::Right | KeyCode::Down => self.cycle_focus(1),
            _ => {}
        }
        true
    }

    /// A click on a button: focuses it and resolves the dialog with it. Returns `false`
    /// once the dialog has been resolved.
    pub fn click(&mut self, target: DialogFocus) -> bool {
        if self.is_resolved() || !self.focus_ring().contains(&target) {
            return false;
        }
        self.focus = target;
        self.activate(target);
        true
    }

    /// Resolves through `target`. Callers check `is_resolved` first.
    fn activate(&mut self, target: DialogFocus) {
        let outcome = match target {
            DialogFocus::Input | DialogFocus::Ok => self.accept(),
            DialogFocus::Cancel => self.cancel(),
        };
        debug_assert!(outcome.is_ok(), "activate on a resolved dialog");
    }

    fn edit_input(&mut self, key: Key) {
        if let Some(ch) = key.printable_char() {
            self.input.insert(ch);
            return;
        }
        match key.code {
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => {
                self.input.move_left();
            }
            KeyCode::Right => {
                self.input.move_right();
            }
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Down => self.cycle_focus(1),
            _ => {}
        }
    }

    fn try_complete_path(&mut self) -> bool {
        if self.focus != DialogFocus::Input || self.request.input_kind != InputKind::PathText {
            return false;
        }
        match path_complete::complete(self.input.value()) {
            Some(completed) => {
                self.input.set_value(completed);
                true
            }
            None => false,
        }
    }

    fn cycle_focus(&mut self, step: isize) {
        let ring = self.focus_ring();
        let idx = ring.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = ring.len() as isize;
        self.focus = ring[(idx + step).rem_euclid(len) as usize];
    }
}

/// Runs dialogs on behalf of command handlers.
#[derive(Clone)]
pub struct DialogCoordinator {
    workspace: SharedWorkspace,
}

impl DialogCoordinator {
    pub fn new(workspace: &SharedWorkspace) -> Self {
        Self {
            workspace: workspace.clone(),
        }
    }

    /// Shows `request` modally and suspends until the user resolves it.
    pub async fn show(&self, request: DialogRequest) -> DialogResult {
        let (tx, rx) = oneshot::channel();
        let id = self
            .workspace
            .borrow_mut()
            .overlays
            .push(DialogView::new(request, tx));

        // A dropped sender (dialog torn down unresolved) reads as a cancel.
        let value = rx.await.unwrap_or(None);

        self.workspace.borrow_mut().overlays.pop(id);
        DialogResult { value }
    }

    pub async fn show_message(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show(DialogRequest::message(title, text)).await;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dialog.rs"]
mod tests;
