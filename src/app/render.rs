use super::menu::MenuItem;
use super::util::{centered_rect, scroll_to_show};
use super::{App, HitRegions};
use crate::core::text_window;
use crate::kernel::dialog::{DialogFocus, DialogView, InputKind};
use crate::kernel::line_input::LineInput;
use crate::kernel::overlay::FocusTarget;
use crate::kernel::path_complete;
use crate::kernel::session::cursor_label;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

const BAR_STYLE: Style = Style::new().bg(Color::Gray).fg(Color::Black);
const HIGHLIGHT_STYLE: Style = Style::new().bg(Color::Black).fg(Color::White);
const DIALOG_STYLE: Style = Style::new().bg(Color::Gray).fg(Color::Black);
const MUTED_STYLE: Style = Style::new().fg(Color::DarkGray);
const SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
const SEARCH_PROMPT: &str = "Find: ";
const INPUT_PROMPT: &str = "> ";
const OK_LABEL: &str = "< OK >";
const CANCEL_LABEL: &str = "< Cancel >";
const BUTTON_GAP: u16 = 3;

/// Glyph and cell width used to draw `ch` in the editor.
pub(super) fn cell(ch: char) -> (char, usize) {
    match ch {
        '\t' => (' ', 1),
        _ if ch.is_control() => (' ', 1),
        _ => (ch, UnicodeWidthChar::width(ch).unwrap_or(0)),
    }
}

/// Line-number column: digits of the last line number plus one space.
pub(super) fn gutter_width(len_lines: usize) -> u16 {
    let digits = len_lines.max(1).ilog10() + 1;
    u16::try_from(digits + 1).unwrap_or(u16::MAX)
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.hits = HitRegions::default();
        let (search_active, status_visible) = {
            let ws = self.workspace.borrow();
            (ws.search.is_active(), ws.session.status_bar_visible)
        };

        let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
        if search_active {
            constraints.push(Constraint::Length(1));
        }
        if status_visible {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::vertical(constraints).split(area);

        self.render_editor(frame, chunks[1]);
        let mut next = 2;
        if search_active {
            self.render_search_bar(frame, chunks[next]);
            next += 1;
        }
        if status_visible {
            self.render_status(frame, chunks[next]);
        }
        self.render_menu_bar(frame, chunks[0]);
        self.render_dialogs(frame, area);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let ws = self.workspace.borrow();
        let doc = &ws.document;
        let gutter_w = gutter_width(doc.len_lines()).min(area.width);
        let scrollbar_w = u16::from(area.width > gutter_w);
        let text_area = Rect::new(
            area.x + gutter_w,
            area.y,
            area.width - gutter_w - scrollbar_w,
            area.height,
        );
        self.hits.editor = text_area;

        let height = text_area.height as usize;
        let width = text_area.width as usize;
        self.viewport.height = height;

        let (row, col) = doc.cursor_row_col();
        let cursor_x: usize = doc
            .line(row)
            .map(|line| line.chars().take(col).map(|ch| cell(ch).1).sum())
            .unwrap_or(0);
        self.viewport.scroll_row = scroll_to_show(self.viewport.scroll_row, row, height);
        self.viewport.scroll_col = scroll_to_show(self.viewport.scroll_col, cursor_x, width);
        let (scroll_row, scroll_col) = (self.viewport.scroll_row, self.viewport.scroll_col);

        let selection = doc.selection().filter(|(start, end)| start < end);
        let last_row = (scroll_row + height).min(doc.len_lines());
        let number_w = usize::from(gutter_w.saturating_sub(1));
        let numbers: Vec<Line> = (scroll_row..last_row)
            .map(|r| Line::styled(format!("{:>number_w$} ", r + 1), MUTED_STYLE))
            .collect();
        frame.render_widget(
            Paragraph::new(numbers),
            Rect::new(area.x, area.y, gutter_w, area.height),
        );

        let mut lines = Vec::with_capacity(height);
        for r in scroll_row..last_row {
            let start = doc.rope().line_to_char(r);
            let text = doc.line(r).unwrap_or_default();
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_selected = false;
            let mut x = 0usize;

            for (i, ch) in text.chars().take(doc.line_len(r)).enumerate() {
                let (glyph, w) = cell(ch);
                if x < scroll_col {
                    x += w;
                    continue;
                }
                if x + w > scroll_col + width {
                    break;
                }
                x += w;
                let selected = selection.is_some_and(|(s, e)| (s..e).contains(&(start + i)));
                if selected != run_selected && !run.is_empty() {
                    spans.push(styled_run(std::mem::take(&mut run), run_selected));
                }
                run_selected = selected;
                run.push(glyph);
            }
            if !run.is_empty() {
                spans.push(styled_run(run, run_selected));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), text_area);

        if scrollbar_w > 0 {
            let mut state = ScrollbarState::new(doc.len_lines())
                .position(scroll_row)
                .viewport_content_length(height);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area,
                &mut state,
            );
        }

        if ws.focus() == FocusTarget::Editor && text_area.width > 0 && text_area.height > 0 {
            let x = text_area.x + (cursor_x - scroll_col) as u16;
            let y = text_area.y + (row - scroll_row) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_menu_bar(&mut self, frame: &mut Frame, area: Rect) {
        let menu_focused = self.workspace.borrow().focus() == FocusTarget::MenuBar;
        let mut spans = Vec::new();
        let mut x = area.x;
        let mut dropdown_x = area.x;

        for (idx, menu) in self.menu.menus().iter().enumerate() {
            let label = format!(" {} ", menu.title);
            let style = if menu_focused && idx == self.menu.selected_menu() {
                dropdown_x = x;
                HIGHLIGHT_STYLE
            } else {
                BAR_STYLE
            };
            let label_w = text_window::display_width(&label) as u16;
            self.hits
                .menu_titles
                .push(Rect::new(x, area.y, label_w, area.height).intersection(area));
            x = x.saturating_add(label_w);
            spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(BAR_STYLE), area);

        if menu_focused {
            let bounds = frame.area();
            self.render_dropdown(frame, dropdown_x, area.y.saturating_add(1), bounds);
        }
    }

    fn render_dropdown(&mut self, frame: &mut Frame, x: u16, y: u16, bounds: Rect) {
        let menu = self.menu.current();
        let hints: Vec<String> = menu
            .items
            .iter()
            .map(|item| match item {
                MenuItem::Action(_, command) => self
                    .keybindings
                    .key_for(*command)
                    .map(|key| key.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .collect();
        let label_w = menu
            .items
            .iter()
            .map(|item| text_window::display_width(item.label()))
            .max()
            .unwrap_or(0);
        let hint_w = hints
            .iter()
            .map(|h| text_window::display_width(h))
            .max()
            .unwrap_or(0);
        let content_w = label_w + if hint_w > 0 { hint_w + 3 } else { 0 };
        let width = (content_w as u16).saturating_add(4).min(bounds.width);
        let height = (menu.items.len() as u16).saturating_add(2);
        let bottom = bounds.y.saturating_add(bounds.height);
        if y >= bottom || width < 3 {
            return;
        }
        let x = x.min(bounds.x + bounds.width.saturating_sub(width));
        let popup = Rect::new(x, y, width, height.min(bottom - y));

        let inner_w = width.saturating_sub(2) as usize;
        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                MenuItem::Separator => Line::from("─".repeat(inner_w)),
                MenuItem::Stub(label) => Line::styled(
                    format!(" {label:<w$}", w = inner_w.saturating_sub(1)),
                    MUTED_STYLE,
                ),
                MenuItem::Action(label, _) => {
                    let style = if idx == self.menu.selected_item() {
                        HIGHLIGHT_STYLE
                    } else {
                        BAR_STYLE
                    };
                    let hint = &hints[idx];
                    let pad = inner_w.saturating_sub(label.len() + hint.len() + 2);
                    Line::styled(format!(" {label}{}{hint} ", " ".repeat(pad)), style)
                }
            })
            .collect();

        let block = Block::default().borders(Borders::ALL).style(BAR_STYLE);
        self.hits.dropdown = Some(block.inner(popup));
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).style(BAR_STYLE).block(block), popup);
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect) {
        let ws = self.workspace.borrow();
        let focused = ws.focus() == FocusTarget::SearchBar;
        let prompt_w = text_window::display_width(SEARCH_PROMPT) as u16;
        let field = Rect::new(
            area.x.saturating_add(prompt_w),
            area.y,
            area.width.saturating_sub(prompt_w),
            area.height,
        );

        let (visible, cursor_x) = input_window(ws.search.input(), field);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(SEARCH_PROMPT, MUTED_STYLE),
                Span::raw(visible),
            ])),
            area,
        );
        if focused && field.width > 0 {
            frame.set_cursor_position(Position::new(cursor_x, field.y));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let ws = self.workspace.borrow();
        let right = format!("{} ", cursor_label(&ws.document));
        let right_w = text_window::display_width(&right) as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_w)]).areas(area);

        frame.render_widget(
            Paragraph::new(ws.session.status_text.as_str()).style(BAR_STYLE),
            left_area,
        );
        frame.render_widget(
            Paragraph::new(right)
                .style(BAR_STYLE)
                .alignment(Alignment::Right),
            right_area,
        );
    }

    fn render_dialogs(&mut self, frame: &mut Frame, area: Rect) {
        let ws = self.workspace.borrow();
        let mut cursor = None;
        for (id, dialog) in ws.overlays.iter_paint_order() {
            let focused = ws.focus() == FocusTarget::Overlay(id);
            let (pos, buttons) = render_dialog(frame, area, dialog);
            if focused {
                cursor = pos;
            }
            // Painted last means topmost; only its buttons take clicks.
            self.hits.dialog_buttons = buttons;
        }
        if let Some(pos) = cursor {
            frame.set_cursor_position(pos);
        }
    }
}

fn styled_run(text: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(text, SELECTION_STYLE)
    } else {
        Span::raw(text)
    }
}

/// Visible slice of a single-line input and the screen column of its cursor.
fn input_window(input: &LineInput, field: Rect) -> (String, u16) {
    let value = input.value();
    let cursor = input.cursor().min(value.len());
    let (start, end) = text_window::visible_span(value, cursor, field.width as usize);
    let before_w = text_window::display_width(value.get(start..cursor).unwrap_or_default()) as u16;
    let x = field
        .x
        .saturating_add(before_w)
        .min(field.x + field.width.saturating_sub(1));
    (value.get(start..end).unwrap_or_default().to_string(), x)
}

/// Draws one dialog. Returns where the text cursor belongs if the input is focused, and
/// the screen cells of its buttons.
fn render_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &DialogView,
) -> (Option<Position>, Vec<(DialogFocus, Rect)>) {
    let request = dialog.request();
    let label_lines: Vec<&str> = request.prompt_label.lines().collect();
    let with_input = request.has_input();
    let with_candidates = request.input_kind == InputKind::PathText;

    let body_rows = label_lines.len() + usize::from(with_input) + usize::from(with_candidates) + 2;
    let popup = centered_rect(60, (body_rows + 2) as u16, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", request.title))
        .title_alignment(Alignment::Center)
        .style(DIALOG_STYLE);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return (None, Vec::new());
    }

    let mut lines: Vec<Line> = label_lines.iter().map(|l| Line::from(*l)).collect();
    let mut cursor = None;

    if with_input {
        let prompt_w = text_window::display_width(INPUT_PROMPT) as u16;
        let row = inner.y.saturating_add(lines.len() as u16);
        let field = Rect::new(
            inner.x.saturating_add(prompt_w),
            row,
            inner.width.saturating_sub(prompt_w),
            1,
        );
        let (visible, cursor_x) = input_window(dialog.input(), field);
        let input_style = if dialog.focus() == DialogFocus::Input {
            HIGHLIGHT_STYLE
        } else {
            DIALOG_STYLE
        };
        lines.push(Line::from(vec![
            Span::raw(INPUT_PROMPT),
            Span::styled(
                format!("{visible:<w$}", w = field.width as usize),
                input_style,
            ),
        ]));
        if dialog.focus() == DialogFocus::Input && row < inner.y + inner.height {
            cursor = Some(Position::new(cursor_x, row));
        }
    }

    if with_candidates {
        let names: Vec<String> = path_complete::candidates(dialog.input().value())
            .into_iter()
            .map(|c| if c.is_dir { format!("{}/", c.name) } else { c.name })
            .collect();
        let joined = names.join("  ");
        let fit = text_window::fit_width(&joined, inner.width as usize);
        lines.push(Line::styled(joined[..fit].to_string(), MUTED_STYLE));
    }

    lines.push(Line::from(""));
    let button_row = inner.y.saturating_add(lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).style(DIALOG_STYLE), inner);

    let mut labels = vec![(DialogFocus::Ok, OK_LABEL)];
    if with_input {
        labels.push((DialogFocus::Cancel, CANCEL_LABEL));
    }
    let total: u16 = labels
        .iter()
        .map(|(_, label)| text_window::display_width(label) as u16)
        .sum::<u16>()
        + BUTTON_GAP * (labels.len() as u16 - 1);
    if button_row >= inner.y + inner.height {
        return (cursor, Vec::new());
    }

    let mut x = inner.x + inner.width.saturating_sub(total) / 2;
    let mut buttons = Vec::with_capacity(labels.len());
    for (target, label) in labels {
        let style = if dialog.focus() == target {
            HIGHLIGHT_STYLE
        } else {
            DIALOG_STYLE
        };
        let label_w = text_window::display_width(label) as u16;
        let rect = Rect::new(x, button_row, label_w, 1).intersection(inner);
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        buttons.push((target, rect));
        x = x.saturating_add(rect.width + BUTTON_GAP);
    }
    (cursor, buttons)
}
