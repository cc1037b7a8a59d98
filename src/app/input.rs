//! Key routing: the focused target gets the key first.
//!
//! Order of precedence: a focused dialog swallows everything, then the menu bar, the
//! search bar, and finally the editor with its keybindings.

use super::menu::MenuOutcome;
use super::App;
use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::keybinding::KeybindingContext;
use crate::kernel::overlay::{FocusTarget, OverlayId};

impl App {
    pub fn handle_key(&mut self, key: Key) {
        let focus = self.workspace.borrow().focus();
        match focus {
            FocusTarget::Overlay(id) => self.route_to_dialog(id, key),
            FocusTarget::MenuBar => self.route_to_menu(key),
            FocusTarget::SearchBar => self.route_to_search(key),
            FocusTarget::Editor => self.route_to_editor(key),
        }
    }

    /// Bracketed paste goes to whatever holds focus. Single-line fields keep the first line.
    pub fn paste_text(&mut self, text: &str) {
        let mut ws = self.workspace.borrow_mut();
        let first_line = text.lines().next().unwrap_or_default();
        match ws.focus() {
            FocusTarget::Overlay(id) => {
                if let Some(dialog) = ws.overlays.get_mut(id) {
                    dialog.paste(first_line);
                }
            }
            FocusTarget::SearchBar => ws.search.input_mut().insert_str(first_line),
            FocusTarget::Editor => ws.document.insert_text(text),
            FocusTarget::MenuBar => {}
        }
    }

    fn route_to_dialog(&mut self, id: OverlayId, key: Key) {
        let mut ws = self.workspace.borrow_mut();
        let Some(dialog) = ws.overlays.get_mut(id) else {
            tracing::debug!(%id, "focused overlay is gone");
            return;
        };
        if !dialog.handle_key(key) {
            tracing::debug!(%id, "key ignored by resolved dialog");
        }
    }

    fn route_to_menu(&mut self, key: Key) {
        if let Some(command) = self.keybindings.resolve(KeybindingContext::Global, &key) {
            if matches!(command, Command::ToggleMenuFocus | Command::Quit) {
                self.run_command(command);
                return;
            }
        }

        let outcome = self.menu.handle_key(key);
        self.apply_menu_outcome(outcome);
    }

    pub(super) fn apply_menu_outcome(&mut self, outcome: MenuOutcome) {
        match outcome {
            MenuOutcome::Stay => {}
            MenuOutcome::Close => {
                self.workspace
                    .borrow_mut()
                    .overlays
                    .set_focus(FocusTarget::Editor);
            }
            MenuOutcome::Run(command) => {
                self.workspace
                    .borrow_mut()
                    .overlays
                    .set_focus(FocusTarget::Editor);
                self.run_command(command);
            }
        }
    }

    fn route_to_search(&mut self, key: Key) {
        let chord =
            key.modifiers.contains(KeyModifiers::CONTROL) || matches!(key.code, KeyCode::F(_));
        if chord {
            if let Some(command) = self.keybindings.resolve(KeybindingContext::Global, &key) {
                self.run_command(command);
                return;
            }
        }

        let mut ws = self.workspace.borrow_mut();
        let ws = &mut *ws;
        match key.code {
            KeyCode::Esc => {
                ws.search.cancel();
                ws.overlays.set_focus(FocusTarget::Editor);
            }
            KeyCode::Enter => {
                ws.search.accept();
                ws.overlays.set_focus(FocusTarget::Editor);
                ws.search.find_next(&mut ws.document);
            }
            KeyCode::Backspace => {
                ws.search.input_mut().backspace();
            }
            KeyCode::Delete => {
                ws.search.input_mut().delete();
            }
            KeyCode::Left => {
                ws.search.input_mut().move_left();
            }
            KeyCode::Right => {
                ws.search.input_mut().move_right();
            }
            KeyCode::Home => ws.search.input_mut().move_home(),
            KeyCode::End => ws.search.input_mut().move_end(),
            _ => {
                if let Some(ch) = key.printable_char() {
                    ws.search.input_mut().insert(ch);
                }
            }
        }
    }

    fn route_to_editor(&mut self, key: Key) {
        if let Some(command) = self.keybindings.resolve(KeybindingContext::Editor, &key) {
            self.run_command(command);
            return;
        }

        let page = self.viewport.height.max(1);
        let extend = key.has_shift();
        let mut ws = self.workspace.borrow_mut();
        let doc = &mut ws.document;

        if let Some(ch) = key.printable_char() {
            let mut buf = [0u8; 4];
            doc.insert_text(ch.encode_utf8(&mut buf));
            return;
        }

        match key.code {
            KeyCode::Enter => doc.insert_text("\n"),
            KeyCode::Backspace => {
                doc.delete_backward();
            }
            KeyCode::Delete => {
                doc.delete_forward();
            }
            KeyCode::Left => doc.move_left(extend),
            KeyCode::Right => doc.move_right(extend),
            KeyCode::Up => doc.move_up(1, extend),
            KeyCode::Down => doc.move_down(1, extend),
            KeyCode::Home => doc.move_line_start(extend),
            KeyCode::End => doc.move_line_end(extend),
            KeyCode::PageUp => doc.move_up(page, extend),
            KeyCode::PageDown => doc.move_down(page, extend),
            KeyCode::Esc => doc.clear_selection(),
            _ => {}
        }
    }
}
