//! 快捷键：按键 → 命令
//!
//! 两层查找：编辑区专属绑定优先，其次全局绑定。
//! 用户设置中的规则覆盖默认值，空命令表示解绑。

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::settings::{parse_keybinding, KeybindingRule};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
}

impl KeybindingContext {
    /// 命令默认归属的上下文
    pub fn for_command(command: Command) -> Self {
        match command {
            Command::InsertTab | Command::RemoveLeadingTab => Self::Editor,
            _ => Self::Global,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
        }
    }

    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::new();
        service.apply_rules(rules);
        service
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        match context {
            KeybindingContext::Global => self.global.get(key).copied(),
            KeybindingContext::Editor => self
                .editor
                .get(key)
                .or_else(|| self.global.get(key))
                .copied(),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// 菜单提示用：绑定到 `command` 的按键中修饰键最少的一个
    pub fn key_for(&self, command: Command) -> Option<Key> {
        self.editor
            .iter()
            .chain(self.global.iter())
            .filter(|(_, c)| **c == command)
            .map(|(k, _)| *k)
            .min_by_key(|k| (k.modifiers.bits().count_ones(), k.to_string()))
    }

    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unrecognised key in keybinding rule");
                continue;
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(KeybindingContext::Global, &key);
                let _ = self.unbind(KeybindingContext::Editor, &key);
                continue;
            }
            match Command::from_name(&rule.command) {
                Some(command) => {
                    self.bind(KeybindingContext::for_command(command), key, command);
                }
                None => {
                    tracing::warn!(command = %rule.command, "unknown command in keybinding rule");
                }
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('e')), Command::ToggleMenuFocus);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);

    bindings.insert(Key::ctrl(KeyCode::Char('z')), Command::Undo);
    bindings.insert(Key::ctrl(KeyCode::Char('x')), Command::Cut);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Copy);
    bindings.insert(Key::ctrl(KeyCode::Char('v')), Command::Paste);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);

    bindings.insert(Key::ctrl(KeyCode::Char('f')), Command::Find);
    bindings.insert(Key::simple(KeyCode::F(3)), Command::FindNext);
    bindings.insert(Key::ctrl(KeyCode::Char('g')), Command::GoToLine);
    bindings.insert(Key::simple(KeyCode::F(5)), Command::InsertTimeDate);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::RemoveLeadingTab);
    bindings
}
