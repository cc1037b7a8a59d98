use super::*;
use crate::core::event::{Key, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::future::Future;

fn run_local<F: Future>(fut: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    tokio::task::LocalSet::new().block_on(&rt, fut)
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn app() -> App {
    App::new(&Settings::default())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(Key::simple(code));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn text(app: &App) -> String {
    app.workspace().borrow().document.text()
}

fn focus(app: &App) -> FocusTarget {
    app.workspace().borrow().focus()
}

fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer.content[usize::from(y * width + x)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_editor_typing_and_selection() {
    run_local(async {
        let mut app = app();
        type_text(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "World");
        assert_eq!(text(&app), "hello\nWorld");

        app.handle_key(Key::shift(KeyCode::Left));
        app.handle_key(Key::shift(KeyCode::Left));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(text(&app), "hello\nWor");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Delete);
        assert_eq!(text(&app), "ello\nWor");
    });
}

#[test]
fn test_tab_and_backtab_in_editor() {
    run_local(async {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "x");
        assert_eq!(text(&app), "    x");

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(text(&app), "x");
    });
}

#[test]
fn test_menu_focus_and_activation() {
    run_local(async {
        let mut app = app();
        type_text(&mut app, "ab");

        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        assert_eq!(focus(&app), FocusTarget::MenuBar);

        // Typing does not reach the editor while the menu has focus.
        type_text(&mut app, "z");
        assert_eq!(text(&app), "ab");

        press(&mut app, KeyCode::Right);
        assert_eq!(app.menu().current().title, "Edit");
        press(&mut app, KeyCode::Enter);
        assert_eq!(focus(&app), FocusTarget::Editor);
        assert_eq!(text(&app), "a");

        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        press(&mut app, KeyCode::Esc);
        assert_eq!(focus(&app), FocusTarget::Editor);

        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        assert_eq!(focus(&app), FocusTarget::Editor);
    });
}

#[test]
fn test_reopening_menu_resets_item() {
    run_local(async {
        let mut app = app();
        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);

        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        assert_eq!(app.menu().selected_item(), 0);
    });
}

#[test]
fn test_dialog_captures_keys_until_resolved() {
    run_local(async {
        let mut app = app();
        for _ in 0..5 {
            type_text(&mut app, "line");
            press(&mut app, KeyCode::Enter);
        }

        app.handle_key(Key::ctrl(KeyCode::Char('g')));
        settle().await;
        assert!(matches!(focus(&app), FocusTarget::Overlay(_)));

        type_text(&mut app, "3");
        app.handle_key(Key::ctrl(KeyCode::Char('q')));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Enter);
        settle().await;

        let ws = app.workspace().borrow();
        assert!(ws.overlays.is_empty());
        assert_eq!(ws.focus(), FocusTarget::Editor);
        assert_eq!(ws.document.cursor_row_col(), (2, 0));
        assert!(!ws.document.text().contains('3'));
    });
}

#[test]
fn test_search_bar_flow() {
    run_local(async {
        let mut app = app();
        type_text(&mut app, "abc abc");
        press(&mut app, KeyCode::Home);

        app.handle_key(Key::ctrl(KeyCode::Char('f')));
        assert_eq!(focus(&app), FocusTarget::SearchBar);
        type_text(&mut app, "bc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(focus(&app), FocusTarget::Editor);
        assert_eq!(app.workspace().borrow().document.cursor(), 1);

        press(&mut app, KeyCode::F(3));
        assert_eq!(app.workspace().borrow().document.cursor(), 5);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.workspace().borrow().document.cursor(), 1);

        app.handle_key(Key::ctrl(KeyCode::Char('f')));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(focus(&app), FocusTarget::Editor);
        assert_eq!(app.workspace().borrow().search.term(), Some("bc"));
        assert_eq!(text(&app), "abc abc");
    });
}

#[test]
fn test_quit_binding() {
    run_local(async {
        let mut app = app();
        app.handle_key(Key::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    });
}

#[test]
fn test_paste_goes_to_focus() {
    run_local(async {
        let mut app = app();
        app.paste_text("one\ntwo");
        assert_eq!(text(&app), "one\ntwo");

        app.handle_key(Key::ctrl(KeyCode::Char('g')));
        settle().await;
        app.paste_text("7\n8");
        let ws = app.workspace().borrow();
        let (_, dialog) = ws.overlays.top().unwrap();
        assert_eq!(dialog.input().value(), "7");
    });
}

#[test]
fn test_render_status_and_dialog() {
    run_local(async {
        let mut app = app();
        type_text(&mut app, "hi");

        let rows = draw(&mut app, 60, 12);
        assert!(rows[0].contains("File") && rows[0].contains("Info"));
        assert!(rows[1].starts_with("1 hi"));
        assert!(rows[11].contains("Press Ctrl-E to open menu."));
        assert!(rows[11].trim_end().ends_with("1:3"));

        app.run_command(Command::ToggleStatusBar);
        let rows = draw(&mut app, 60, 12);
        assert!(!rows[11].contains("Press Ctrl-E"));

        app.run_command(Command::About);
        settle().await;
        let rows = draw(&mut app, 60, 12);
        assert!(rows.iter().any(|row| row.contains(" About ")));
        assert!(rows.iter().any(|row| row.contains("< OK >")));
        assert!(!rows.iter().any(|row| row.contains("Cancel")));
    });
}

#[test]
fn test_render_scrolls_to_cursor() {
    run_local(async {
        let mut app = app();
        for i in 0..30 {
            type_text(&mut app, &format!("row{i}"));
            press(&mut app, KeyCode::Enter);
        }
        type_text(&mut app, "last");

        let rows = draw(&mut app, 40, 10);
        // Menu bar, 8 editor rows, status line.
        assert!(rows[8].starts_with("31 last"));
        assert!(rows[1].starts_with("24 row23"));
        assert_eq!(app.viewport().height, 8);
        assert_eq!(app.viewport().scroll_row, 23);

        // Scrolled to the end: the thumb sits low on the track.
        assert!(rows[1].ends_with('║'));
        assert!(rows[7].ends_with('█'));
        assert!(rows[8].ends_with('║'));
    });
}

#[test]
fn test_render_menu_dropdown() {
    run_local(async {
        let mut app = app();
        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        let rows = draw(&mut app, 60, 12);
        assert!(rows.iter().any(|row| row.contains("Save as")));
        assert!(rows.iter().any(|row| row.contains("Exit")));
        assert!(rows
            .iter()
            .any(|row| row.contains("Save") && row.contains("Ctrl+S")));
        assert!(rows
            .iter()
            .any(|row| row.contains("Exit") && row.contains("Ctrl+Q")));
    });
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

/// Screen column where `needle` starts in `row`.
fn column_of(row: &str, needle: &str) -> u16 {
    let byte = row.find(needle).unwrap();
    row[..byte].chars().count() as u16
}

#[test]
fn test_gutter_width_follows_line_count() {
    run_local(async {
        let mut app = app();
        for _ in 0..9 {
            press(&mut app, KeyCode::Enter);
        }
        type_text(&mut app, "x");
        let rows = draw(&mut app, 30, 14);
        assert!(rows[1].starts_with(" 1 "));
        assert!(rows[10].starts_with("10 x"));
        // Short document: the thumb fills the track.
        assert!(rows[1].ends_with('█'));
        assert!(rows[11].starts_with("  "));
    });
}

#[test]
fn test_click_places_editor_cursor() {
    run_local(async {
        let mut app = app();
        app.paste_text("hello\nworld");
        draw(&mut app, 60, 12);

        // Gutter is two cells wide: "1 ".
        click(&mut app, 5, 2);
        assert_eq!(app.workspace().borrow().document.cursor(), 9);

        click(&mut app, 40, 1);
        assert_eq!(app.workspace().borrow().document.cursor(), 5);

        click(&mut app, 3, 9);
        assert_eq!(app.workspace().borrow().document.cursor_row_col(), (1, 1));

        // The gutter is not text.
        click(&mut app, 0, 1);
        assert_eq!(app.workspace().borrow().document.cursor_row_col(), (1, 1));

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.workspace().borrow().document.cursor_row_col(), (1, 1));
    });
}

#[test]
fn test_click_menu_title_and_item() {
    run_local(async {
        let mut app = app();
        type_text(&mut app, "ab");
        app.handle_key(Key::ctrl(KeyCode::Char('a')));

        let rows = draw(&mut app, 60, 12);
        click(&mut app, column_of(&rows[0], "Edit"), 0);
        assert_eq!(focus(&app), FocusTarget::MenuBar);
        assert_eq!(app.menu().current().title, "Edit");

        let rows = draw(&mut app, 60, 12);
        let cut_row = rows.iter().position(|row| row.contains("Cut")).unwrap() as u16;
        // The separator above Cut does nothing.
        click(&mut app, column_of(&rows[cut_row as usize], "Cut"), cut_row - 1);
        assert_eq!(focus(&app), FocusTarget::MenuBar);

        click(&mut app, column_of(&rows[cut_row as usize], "Cut"), cut_row);
        assert_eq!(focus(&app), FocusTarget::Editor);
        assert_eq!(text(&app), "");
        assert_eq!(app.workspace().borrow().clipboard.text(), Some("ab"));
    });
}

#[test]
fn test_click_outside_menu_closes_it() {
    run_local(async {
        let mut app = app();
        app.handle_key(Key::ctrl(KeyCode::Char('e')));
        draw(&mut app, 60, 12);
        click(&mut app, 40, 8);
        assert_eq!(focus(&app), FocusTarget::Editor);
    });
}

#[test]
fn test_click_dialog_buttons() {
    run_local(async {
        let mut app = app();
        app.paste_text("a\nb\nc\nd");

        app.run_command(Command::GoToLine);
        settle().await;
        type_text(&mut app, "2");
        let rows = draw(&mut app, 60, 12);

        // Clicks outside the dialog are swallowed.
        click(&mut app, column_of(&rows[0], "File"), 0);
        assert!(matches!(focus(&app), FocusTarget::Overlay(_)));

        let ok_row = rows.iter().position(|row| row.contains("< OK >")).unwrap();
        click(&mut app, column_of(&rows[ok_row], "< OK >") + 2, ok_row as u16);
        settle().await;
        assert!(app.workspace().borrow().overlays.is_empty());
        assert_eq!(app.workspace().borrow().document.cursor_row_col(), (1, 0));

        app.run_command(Command::GoToLine);
        settle().await;
        type_text(&mut app, "4");
        let rows = draw(&mut app, 60, 12);
        let row = rows.iter().position(|row| row.contains("< Cancel >")).unwrap();
        click(&mut app, column_of(&rows[row], "< Cancel >"), row as u16);
        settle().await;
        assert!(app.workspace().borrow().overlays.is_empty());
        assert_eq!(app.workspace().borrow().document.cursor_row_col(), (1, 0));
    });
}
