//! Left-click routing against the regions recorded on the last draw.
//!
//! A dialog on screen is modal: only its own buttons take clicks.

use super::menu::MenuOutcome;
use super::render::cell;
use super::App;
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::core::Command;
use crate::kernel::overlay::FocusTarget;
use ratatui::layout::Position;

impl App {
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(event.column, event.row);

        if !self.workspace.borrow().overlays.is_empty() {
            self.click_dialog(pos);
            return;
        }

        if let Some(index) = self.hits.menu_titles.iter().position(|r| r.contains(pos)) {
            self.click_menu_title(index);
            return;
        }

        if self.workspace.borrow().focus() == FocusTarget::MenuBar {
            if let Some(area) = self.hits.dropdown.filter(|r| r.contains(pos)) {
                let outcome = self.menu.click_item(usize::from(pos.y - area.y));
                self.apply_menu_outcome(outcome);
                return;
            }
            self.apply_menu_outcome(MenuOutcome::Close);
        }

        if self.hits.editor.contains(pos) {
            self.click_editor(pos);
        }
    }

    fn click_dialog(&mut self, pos: Position) {
        let Some(target) = self
            .hits
            .dialog_buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(target, _)| *target)
        else {
            return;
        };

        let mut ws = self.workspace.borrow_mut();
        let Some((id, dialog)) = ws.overlays.top_mut() else {
            return;
        };
        if !dialog.click(target) {
            tracing::debug!(%id, "click ignored by resolved dialog");
        }
    }

    fn click_menu_title(&mut self, index: usize) {
        if self.workspace.borrow().focus() != FocusTarget::MenuBar {
            self.run_command(Command::ToggleMenuFocus);
        }
        self.menu.select_menu(index);
    }

    fn click_editor(&mut self, pos: Position) {
        let area = self.hits.editor;
        let row = self.viewport.scroll_row + usize::from(pos.y - area.y);
        let target_x = self.viewport.scroll_col + usize::from(pos.x - area.x);

        let mut ws = self.workspace.borrow_mut();
        if ws.search.is_active() {
            ws.search.cancel();
        }
        ws.overlays.set_focus(FocusTarget::Editor);

        let doc = &mut ws.document;
        let row = row.min(doc.len_lines().saturating_sub(1));
        let mut x = 0usize;
        let mut col = 0usize;
        if let Some(line) = doc.line(row) {
            for ch in line.chars().take(doc.line_len(row)) {
                let w = cell(ch).1;
                if x + w > target_x {
                    break;
                }
                x += w;
                col += 1;
            }
        }
        let offset = doc.row_col_to_char(row, col);
        doc.clear_selection();
        doc.set_cursor(offset);
    }
}
