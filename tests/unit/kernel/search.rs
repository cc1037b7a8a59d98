use super::*;

fn search_for(term: &str, ignore_case: bool) -> SearchState {
    let mut search = SearchState::new(ignore_case);
    search.activate();
    search.input_mut().set_value(term);
    search.accept();
    search
}

#[test]
fn find_next_skips_match_at_cursor() {
    let search = search_for("ab", false);
    let mut doc = TextBuffer::from_text("ab ab ab");

    assert!(search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 3);
    assert!(search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 6);
}

#[test]
fn find_next_wraps_to_top() {
    let search = search_for("x", false);
    let mut doc = TextBuffer::from_text("x..x..");
    doc.set_cursor(3);

    assert!(search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 0);
}

#[test]
fn find_next_treats_term_literally() {
    let search = search_for("a.c", false);
    let mut doc = TextBuffer::from_text("abc a.c");

    assert!(search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 4);
}

#[test]
fn find_next_uses_char_offsets() {
    let search = search_for("b", false);
    let mut doc = TextBuffer::from_text("éé b");

    assert!(search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 3);
}

#[test]
fn ignore_case_setting_is_honoured() {
    let mut doc = TextBuffer::from_text("Hello hello");
    assert!(search_for("HELLO", true).find_next(&mut doc));
    assert_eq!(doc.cursor(), 6);

    let mut doc = TextBuffer::from_text("Hello");
    assert!(!search_for("hello", false).find_next(&mut doc));
    assert_eq!(doc.cursor(), 0);
}

#[test]
fn no_term_is_noop() {
    let search = SearchState::new(false);
    let mut doc = TextBuffer::from_text("abc");
    doc.set_cursor(1);

    assert!(!search.find_next(&mut doc));
    assert_eq!(doc.cursor(), 1);
}

#[test]
fn empty_accept_clears_term() {
    let mut search = search_for("abc", false);
    assert_eq!(search.term(), Some("abc"));

    search.activate();
    assert_eq!(search.input().value(), "abc");
    search.input_mut().clear();
    assert_eq!(search.accept(), None);
    assert!(!search.is_active());
}
