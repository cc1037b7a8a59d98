//! Modal overlays layered above the main view, plus the focus they borrow.
//!
//! Entries are kept topmost-first. Every entry remembers what held focus when it was
//! pushed; popping hands focus back to that target. Removal is by handle from anywhere
//! in the stack, so a non-top pop re-parents the saved focus of the entry stacked on it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Editor,
    MenuBar,
    SearchBar,
    Overlay(OverlayId),
}

#[derive(Debug)]
struct OverlayEntry<T> {
    id: OverlayId,
    content: T,
    previous_focus: FocusTarget,
}

#[derive(Debug)]
pub struct OverlayStack<T> {
    entries: Vec<OverlayEntry<T>>,
    focus: FocusTarget,
    next_id: u64,
}

impl<T> OverlayStack<T> {
    pub fn new(focus: FocusTarget) -> Self {
        Self {
            entries: Vec::new(),
            focus,
            next_id: 1,
        }
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Moves focus between non-overlay targets. Ignored while a modal is up.
    pub fn set_focus(&mut self, target: FocusTarget) {
        if !self.entries.is_empty() || matches!(target, FocusTarget::Overlay(_)) {
            tracing::debug!(?target, "focus change refused while modal is active");
            return;
        }
        self.focus = target;
    }

    /// Puts `content` on top and gives it focus.
    pub fn push(&mut self, content: T) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;

        let previous_focus = self.focus;
        self.entries.insert(
            0,
            OverlayEntry {
                id,
                content,
                previous_focus,
            },
        );
        self.focus = FocusTarget::Overlay(id);
        tracing::debug!(%id, ?previous_focus, depth = self.entries.len(), "overlay pushed");
        id
    }

    /// Removes the entry for `id` wherever it sits. Unknown handles are a no-op.
    pub fn pop(&mut self, id: OverlayId) -> Option<T> {
        let Some(idx) = self.entries.iter().position(|e| e.id == id) else {
            tracing::debug!(%id, "pop of absent overlay ignored");
            return None;
        };
        let entry = self.entries.remove(idx);
        let removed = FocusTarget::Overlay(id);

        if self.focus == removed {
            self.focus = entry.previous_focus;
        }
        for other in &mut self.entries {
            if other.previous_focus == removed {
                other.previous_focus = entry.previous_focus;
            }
        }

        tracing::debug!(%id, focus = ?self.focus, depth = self.entries.len(), "overlay popped");
        Some(entry.content)
    }

    pub fn top(&self) -> Option<(OverlayId, &T)> {
        self.entries.first().map(|e| (e.id, &e.content))
    }

    pub fn top_mut(&mut self) -> Option<(OverlayId, &mut T)> {
        self.entries.first_mut().map(|e| (e.id, &mut e.content))
    }

    pub fn get(&self, id: OverlayId) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.content)
    }

    pub fn get_mut(&mut self, id: OverlayId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.content)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Bottom-to-top, the order overlays are painted in.
    pub fn iter_paint_order(&self) -> impl Iterator<Item = (OverlayId, &T)> {
        self.entries.iter().rev().map(|e| (e.id, &e.content))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for OverlayStack<T> {
    fn default() -> Self {
        Self::new(FocusTarget::Editor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/overlay.rs"]
mod tests;
