//! 编辑器内查找：搜索栏输入 + 查找下一个（到末尾后回绕）

use crate::kernel::line_input::LineInput;
use crate::models::TextBuffer;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: LineInput,
    term: Option<String>,
    active: bool,
    ignore_case: bool,
}

impl SearchState {
    pub fn new(ignore_case: bool) -> Self {
        Self {
            ignore_case,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LineInput {
        &mut self.input
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// 进入搜索模式，输入框预填上一次的搜索词
    pub fn activate(&mut self) {
        self.active = true;
        self.input.set_value(self.term.clone().unwrap_or_default());
    }

    /// 确认搜索词并退出搜索模式；空输入清除搜索词
    pub fn accept(&mut self) -> Option<&str> {
        self.active = false;
        let value = self.input.value();
        self.term = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        self.term.as_deref()
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    fn matcher(&self) -> Option<Regex> {
        let term = self.term.as_deref()?;
        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(self.ignore_case)
            .build()
            .map_err(|e| tracing::warn!(error = %e, "search pattern rejected"))
            .ok()
    }

    /// 把光标移到光标之后的下一处匹配，找不到时从文首回绕。
    /// 返回是否找到匹配。
    pub fn find_next(&self, document: &mut TextBuffer) -> bool {
        let Some(regex) = self.matcher() else {
            return false;
        };

        let text = document.text();
        let rope = document.rope();
        let cursor_byte = rope.char_to_byte(document.cursor());
        let after = text[cursor_byte..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor_byte + i)
            .unwrap_or(text.len());

        let found = regex
            .find_at(&text, after)
            .or_else(|| regex.find(&text))
            .map(|m| rope.byte_to_char(m.start()));

        match found {
            Some(offset) => {
                document.clear_selection();
                document.set_cursor(offset);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/search.rs"]
mod tests;
