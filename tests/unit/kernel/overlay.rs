use super::*;

fn permutations(items: &[OverlayId]) -> Vec<Vec<OverlayId>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn push_moves_focus_to_overlay_and_pop_restores() {
    let mut stack = OverlayStack::new(FocusTarget::Editor);
    let id = stack.push("open");

    assert_eq!(stack.focus(), FocusTarget::Overlay(id));
    assert_eq!(stack.top().map(|(top, _)| top), Some(id));

    assert_eq!(stack.pop(id), Some("open"));
    assert!(stack.is_empty());
    assert_eq!(stack.focus(), FocusTarget::Editor);
}

#[test]
fn newest_overlay_is_on_top() {
    let mut stack = OverlayStack::new(FocusTarget::Editor);
    let _a = stack.push("a");
    let b = stack.push("b");

    assert_eq!(stack.top(), Some((b, &"b")));
    let painted: Vec<_> = stack.iter_paint_order().map(|(_, c)| *c).collect();
    assert_eq!(painted, vec!["a", "b"]);
}

#[test]
fn matched_pops_in_any_order_restore_first_focus() {
    for first_focus in [FocusTarget::Editor, FocusTarget::MenuBar] {
        let mut ids_stack = OverlayStack::<u8>::new(first_focus);
        let ids = [ids_stack.push(0), ids_stack.push(1), ids_stack.push(2)];

        for order in permutations(&ids) {
            let mut stack = OverlayStack::<u8>::new(first_focus);
            for n in 0..3 {
                stack.push(n);
            }
            for id in &order {
                assert!(stack.pop(*id).is_some());
                if let FocusTarget::Overlay(focused) = stack.focus() {
                    assert!(stack.contains(focused), "focus points at a removed overlay");
                }
            }
            assert!(stack.is_empty());
            assert_eq!(stack.focus(), first_focus, "pop order {order:?}");
        }
    }
}

#[test]
fn pop_of_absent_handle_is_idempotent() {
    let mut stack = OverlayStack::new(FocusTarget::Editor);
    let a = stack.push("a");
    let b = stack.push("b");

    assert!(stack.pop(b).is_some());
    let focus = stack.focus();
    assert!(stack.pop(b).is_none());
    assert_eq!(stack.focus(), focus);
    assert_eq!(stack.len(), 1);

    stack.pop(a);
    assert!(stack.pop(a).is_none());
    assert_eq!(stack.focus(), FocusTarget::Editor);
}

#[test]
fn removing_lower_overlay_keeps_top_focused() {
    let mut stack = OverlayStack::new(FocusTarget::MenuBar);
    let lower = stack.push("lower");
    let upper = stack.push("upper");

    stack.pop(lower);
    assert_eq!(stack.focus(), FocusTarget::Overlay(upper));

    stack.pop(upper);
    assert_eq!(stack.focus(), FocusTarget::MenuBar);
}

#[test]
fn set_focus_is_refused_while_modal() {
    let mut stack = OverlayStack::new(FocusTarget::Editor);
    stack.set_focus(FocusTarget::MenuBar);
    assert_eq!(stack.focus(), FocusTarget::MenuBar);

    let id = stack.push(());
    stack.set_focus(FocusTarget::Editor);
    assert_eq!(stack.focus(), FocusTarget::Overlay(id));
}
