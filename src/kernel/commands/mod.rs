//! 命令表：Command → 处理函数
//!
//! 非交互命令同步执行，直接修改 [`Workspace`]；
//! 交互命令返回 future，由 `spawn_local` 挂在 LocalSet 上，在对话框处挂起。

pub mod edit;
pub mod file;
pub mod view;

use crate::core::Command;
use crate::kernel::dialog::DialogCoordinator;
use crate::kernel::workspace::{SharedWorkspace, Workspace};
use rustc_hash::FxHashMap;
use std::future::Future;
use std::pin::Pin;
use tokio::task::JoinHandle;

pub type HandlerFuture = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Clone, Copy)]
pub enum Handler {
    Immediate(fn(&mut Workspace)),
    Interactive(fn(SharedWorkspace) -> HandlerFuture),
}

impl Handler {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Handler::Interactive(_))
    }
}

pub struct CommandTable {
    handlers: FxHashMap<Command, Handler>,
}

impl CommandTable {
    pub fn new() -> Self {
        let mut handlers = FxHashMap::default();
        handlers.reserve(Command::ALL.len());

        handlers.insert(Command::NewFile, Handler::Immediate(file::new_file));
        handlers.insert(Command::OpenFile, Handler::Interactive(file::open_file));
        handlers.insert(Command::Save, Handler::Immediate(file::save));
        handlers.insert(Command::SaveAs, Handler::Interactive(file::save_as));
        handlers.insert(Command::Quit, Handler::Immediate(view::quit));

        handlers.insert(Command::Undo, Handler::Immediate(edit::undo));
        handlers.insert(Command::Cut, Handler::Immediate(edit::cut));
        handlers.insert(Command::Copy, Handler::Immediate(edit::copy));
        handlers.insert(Command::Paste, Handler::Immediate(edit::paste));
        handlers.insert(Command::Delete, Handler::Immediate(edit::delete));
        handlers.insert(Command::SelectAll, Handler::Immediate(edit::select_all));
        handlers.insert(
            Command::InsertTimeDate,
            Handler::Immediate(edit::insert_time_date),
        );
        handlers.insert(Command::InsertTab, Handler::Immediate(edit::insert_tab));
        handlers.insert(
            Command::RemoveLeadingTab,
            Handler::Immediate(edit::remove_leading_tab),
        );

        handlers.insert(Command::Find, Handler::Immediate(edit::find));
        handlers.insert(Command::FindNext, Handler::Immediate(edit::find_next));
        handlers.insert(Command::Replace, Handler::Immediate(edit::replace));
        handlers.insert(Command::GoToLine, Handler::Interactive(edit::go_to_line));

        handlers.insert(
            Command::ToggleStatusBar,
            Handler::Immediate(view::toggle_status_bar),
        );
        handlers.insert(
            Command::ToggleMenuFocus,
            Handler::Immediate(view::toggle_menu_focus),
        );
        handlers.insert(Command::About, Handler::Interactive(view::about));

        Self { handlers }
    }

    pub fn handler(&self, command: Command) -> Option<Handler> {
        self.handlers.get(&command).copied()
    }

    /// 执行命令。交互命令（或同步命令产生的错误提示）会生成一个本地任务，返回其句柄。
    ///
    /// 必须在 `LocalSet` 上下文中调用。
    pub fn dispatch(
        &self,
        command: Command,
        workspace: &SharedWorkspace,
    ) -> Option<JoinHandle<()>> {
        let Some(handler) = self.handler(command) else {
            tracing::warn!(command = command.name(), "no handler registered");
            return None;
        };
        tracing::debug!(command = command.name(), "dispatch");

        match handler {
            Handler::Immediate(run) => {
                run(&mut workspace.borrow_mut());
                spawn_notices(workspace)
            }
            Handler::Interactive(start) => {
                Some(tokio::task::spawn_local(start(workspace.clone())))
            }
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 同步命令无法挂起，它们的提示先排队，再由独立任务依次弹出
pub fn spawn_notices(workspace: &SharedWorkspace) -> Option<JoinHandle<()>> {
    let notices = workspace.borrow_mut().take_notices();
    if notices.is_empty() {
        return None;
    }
    let dialogs = DialogCoordinator::new(workspace);
    Some(tokio::task::spawn_local(async move {
        for request in notices {
            dialogs.show(request).await;
        }
    }))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/commands/mod.rs"]
mod tests;
