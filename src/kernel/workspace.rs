//! The explicit context object every command handler receives.

use crate::kernel::clipboard::Clipboard;
use crate::kernel::dialog::{DialogRequest, DialogView};
use crate::kernel::overlay::{FocusTarget, OverlayStack};
use crate::kernel::search::SearchState;
use crate::kernel::services::Settings;
use crate::kernel::session::SessionState;
use crate::models::TextBuffer;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-thread shared handle. Never hold a borrow across an `.await`.
pub type SharedWorkspace = Rc<RefCell<Workspace>>;

#[derive(Debug)]
pub struct Workspace {
    pub document: TextBuffer,
    pub session: SessionState,
    pub overlays: OverlayStack<DialogView>,
    pub clipboard: Clipboard,
    pub search: SearchState,
    tab_size: usize,
    notices: Vec<DialogRequest>,
    should_quit: bool,
}

impl Workspace {
    pub fn new(settings: &Settings) -> Self {
        Self {
            document: TextBuffer::new().with_undo_limit(settings.undo_limit),
            session: SessionState::new(settings.show_status_bar),
            overlays: OverlayStack::new(FocusTarget::Editor),
            clipboard: Clipboard::new(),
            search: SearchState::new(settings.search_ignore_case),
            tab_size: settings.tab_width(),
            notices: Vec::new(),
            should_quit: false,
        }
    }

    pub fn shared(self) -> SharedWorkspace {
        Rc::new(RefCell::new(self))
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub fn focus(&self) -> FocusTarget {
        self.overlays.focus()
    }

    /// Queues a message dialog for a handler that cannot suspend itself.
    pub fn notify(&mut self, request: DialogRequest) {
        self.notices.push(request);
    }

    pub fn take_notices(&mut self) -> Vec<DialogRequest> {
        std::mem::take(&mut self.notices)
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
