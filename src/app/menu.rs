//! 菜单栏：File / Edit / View / Info

use crate::core::event::{Key, KeyCode};
use crate::core::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Action(&'static str, Command),
    /// 显示但不可选中
    Stub(&'static str),
    Separator,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Action(label, _) | MenuItem::Stub(label) => label,
            MenuItem::Separator => "",
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuItem::Action(..))
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    Close,
    Run(Command),
}

#[derive(Debug, Clone)]
pub struct MenuBar {
    menus: Vec<Menu>,
    selected_menu: usize,
    selected_item: usize,
}

impl MenuBar {
    pub fn new() -> Self {
        use MenuItem::{Action, Separator, Stub};

        let menus = vec![
            Menu {
                title: "File",
                items: vec![
                    Action("New", Command::NewFile),
                    Action("Open", Command::OpenFile),
                    Action("Save", Command::Save),
                    Action("Save as", Command::SaveAs),
                    Separator,
                    Action("Exit", Command::Quit),
                ],
            },
            Menu {
                title: "Edit",
                items: vec![
                    Action("Undo", Command::Undo),
                    Separator,
                    Action("Cut", Command::Cut),
                    Action("Copy", Command::Copy),
                    Action("Paste", Command::Paste),
                    Action("Delete", Command::Delete),
                    Separator,
                    Action("Find", Command::Find),
                    Action("Find next", Command::FindNext),
                    Stub("Replace"),
                    Action("Go To", Command::GoToLine),
                    Action("Select All", Command::SelectAll),
                    Action("Time/Date", Command::InsertTimeDate),
                ],
            },
            Menu {
                title: "View",
                items: vec![Action("Status Bar", Command::ToggleStatusBar)],
            },
            Menu {
                title: "Info",
                items: vec![Action("About", Command::About)],
            },
        ];

        Self {
            menus,
            selected_menu: 0,
            selected_item: 0,
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn selected_menu(&self) -> usize {
        self.selected_menu
    }

    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    pub fn current(&self) -> &Menu {
        &self.menus[self.selected_menu]
    }

    /// 打开菜单栏时调用：回到当前菜单的第一个可选项
    pub fn reset_item(&mut self) {
        self.selected_item = self.first_selectable(self.selected_menu).unwrap_or(0);
    }

    pub fn handle_key(&mut self, key: Key) -> MenuOutcome {
        match key.code {
            KeyCode::Esc => MenuOutcome::Close,
            KeyCode::Left => {
                self.switch_menu(-1);
                MenuOutcome::Stay
            }
            KeyCode::Right => {
                self.switch_menu(1);
                MenuOutcome::Stay
            }
            KeyCode::Up => {
                self.move_item(-1);
                MenuOutcome::Stay
            }
            KeyCode::Down => {
                self.move_item(1);
                MenuOutcome::Stay
            }
            KeyCode::Enter => match self.current().items.get(self.selected_item) {
                Some(MenuItem::Action(_, command)) => MenuOutcome::Run(*command),
                _ => MenuOutcome::Stay,
            },
            _ => MenuOutcome::Stay,
        }
    }

    /// Mouse: opens menu `index` at its first selectable item.
    pub fn select_menu(&mut self, index: usize) {
        if index < self.menus.len() {
            self.selected_menu = index;
            self.reset_item();
        }
    }

    /// Mouse: item `index` of the open menu was clicked.
    pub fn click_item(&mut self, index: usize) -> MenuOutcome {
        match self.current().items.get(index) {
            Some(MenuItem::Action(_, command)) => {
                let command = *command;
                self.selected_item = index;
                MenuOutcome::Run(command)
            }
            _ => MenuOutcome::Stay,
        }
    }

    fn switch_menu(&mut self, step: isize) {
        let len = self.menus.len() as isize;
        self.selected_menu = (self.selected_menu as isize + step).rem_euclid(len) as usize;
        self.reset_item();
    }

    fn move_item(&mut self, step: isize) {
        let items = &self.menus[self.selected_menu].items;
        let len = items.len() as isize;
        let mut idx = self.selected_item as isize;
        for _ in 0..len {
            idx = (idx + step).rem_euclid(len);
            if items[idx as usize].is_selectable() {
                self.selected_item = idx as usize;
                return;
            }
        }
    }

    fn first_selectable(&self, menu: usize) -> Option<usize> {
        self.menus[menu].items.iter().position(MenuItem::is_selectable)
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}
