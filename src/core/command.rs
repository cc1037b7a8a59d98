//! 命令系统：语义命令定义
//!
//! Command 只描述"做什么"，与按键、菜单项无关；
//! 按键 → 命令见 `kernel::keybinding`，命令 → 处理函数见 `kernel::commands`。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 文件操作 ====================
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    Quit,

    // ==================== 编辑操作 ====================
    Undo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,
    InsertTimeDate,
    InsertTab,
    RemoveLeadingTab,

    // ==================== 查找 ====================
    Find,
    FindNext,
    Replace,
    GoToLine,

    // ==================== 视图操作 ====================
    ToggleStatusBar,
    ToggleMenuFocus,
    About,
}

impl Command {
    pub const ALL: [Command; 21] = [
        Command::NewFile,
        Command::OpenFile,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
        Command::Undo,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::Delete,
        Command::SelectAll,
        Command::InsertTimeDate,
        Command::InsertTab,
        Command::RemoveLeadingTab,
        Command::Find,
        Command::FindNext,
        Command::Replace,
        Command::GoToLine,
        Command::ToggleStatusBar,
        Command::ToggleMenuFocus,
        Command::About,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::NewFile => "newFile",
            Command::OpenFile => "openFile",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Quit => "quit",
            Command::Undo => "undo",
            Command::Cut => "cut",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::Delete => "delete",
            Command::SelectAll => "selectAll",
            Command::InsertTimeDate => "insertTimeDate",
            Command::InsertTab => "insertTab",
            Command::RemoveLeadingTab => "removeLeadingTab",
            Command::Find => "find",
            Command::FindNext => "findNext",
            Command::Replace => "replace",
            Command::GoToLine => "goToLine",
            Command::ToggleStatusBar => "toggleStatusBar",
            Command::ToggleMenuFocus => "toggleMenuFocus",
            Command::About => "about",
        }
    }

    /// 按名称查找命令，大小写不敏感
    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }

    /// 需要弹出对话框等待用户输入的命令
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Command::OpenFile | Command::SaveAs | Command::GoToLine | Command::About
        )
    }
}
