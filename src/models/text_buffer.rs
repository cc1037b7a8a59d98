//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标（字符偏移）与选区锚点
//! - 行列 ↔ 字符偏移映射
//! - 编辑前快照，支持逐级撤销

use super::edit_history::{EditHistory, Snapshot};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: usize,
    anchor: Option<usize>,
    history: EditHistory,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
            anchor: None,
            history: EditHistory::new(),
        }
    }

    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_limit(limit);
        self
    }

    /// 整体替换内容（新建 / 打开），光标归零，历史清空
    pub fn reset(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = 0;
        self.anchor = None;
        self.history.clear();
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// 流式写入到 Writer，避免整文拷贝
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    // ==================== 光标 ====================

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 设置光标（超出文本长度时钳制到末尾）
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.rope.len_chars());
    }

    /// 光标所在 (行, 列)，均从 0 开始，列按字符计
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let row = self.rope.char_to_line(self.cursor);
        (row, self.cursor - self.rope.line_to_char(row))
    }

    /// 行列 → 字符偏移；行、列都会钳制到有效范围
    pub fn row_col_to_char(&self, row: usize, col: usize) -> usize {
        let row = row.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }

    /// 行长度（不含换行符）
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        if row < self.rope.len_lines() {
            Some(slice_to_cow(self.rope.line(row)))
        } else {
            None
        }
    }

    /// 当前行中光标之前的文本
    pub fn line_before_cursor(&self) -> String {
        let (row, _) = self.cursor_row_col();
        let start = self.rope.line_to_char(row);
        self.rope.slice(start..self.cursor).to_string()
    }

    pub fn move_left(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.prev_boundary(self.cursor);
    }

    pub fn move_right(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.next_boundary(self.cursor);
    }

    pub fn move_up(&mut self, lines: usize, extend: bool) {
        self.begin_motion(extend);
        let (row, col) = self.cursor_row_col();
        self.cursor = self.row_col_to_char(row.saturating_sub(lines), col);
    }

    pub fn move_down(&mut self, lines: usize, extend: bool) {
        self.begin_motion(extend);
        let (row, col) = self.cursor_row_col();
        self.cursor = self.row_col_to_char(row.saturating_add(lines), col);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.begin_motion(extend);
        let (row, _) = self.cursor_row_col();
        self.cursor = self.rope.line_to_char(row);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        self.begin_motion(extend);
        let (row, _) = self.cursor_row_col();
        self.cursor = self.row_col_to_char(row, usize::MAX);
    }

    fn begin_motion(&mut self, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
    }

    fn prev_boundary(&self, offset: usize) -> usize {
        if offset == 0 {
            return 0;
        }
        let row = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(row);
        if offset == line_start {
            // 跨行：回到上一行行尾（把 \r\n 视为一个整体）
            let prev = offset - 1;
            if prev > 0 && self.rope.char(prev) == '\n' && self.rope.char(prev - 1) == '\r' {
                return prev - 1;
            }
            return prev;
        }
        let line = slice_to_cow(self.rope.slice(line_start..offset));
        line.grapheme_indices(true)
            .last()
            .map(|(byte_idx, _)| line_start + line[..byte_idx].chars().count())
            .unwrap_or(line_start)
    }

    fn next_boundary(&self, offset: usize) -> usize {
        let len = self.rope.len_chars();
        if offset >= len {
            return len;
        }
        let row = self.rope.char_to_line(offset);
        let line_end = self.rope.line_to_char(row) + self.line_len(row);
        if offset >= line_end {
            // 行尾：跳过换行符
            let line_start = self.rope.line_to_char(row);
            return (line_start + self.rope.line(row).len_chars()).min(len);
        }
        let rest = slice_to_cow(self.rope.slice(offset..line_end));
        rest.graphemes(true)
            .next()
            .map(|g| offset + g.chars().count())
            .unwrap_or(line_end)
    }

    // ==================== 选区 ====================

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// 以当前光标为锚点开始选择
    pub fn start_selection(&mut self) {
        self.anchor = Some(self.cursor);
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// 选区 `[start, end)`；无锚点时返回 None
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?.min(self.rope.len_chars());
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some_and(|(start, end)| start < end)
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?;
        Some(self.rope.slice(start..end).to_string())
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.rope.len_chars();
    }

    // ==================== 编辑 ====================

    /// 在光标处插入文本；有选区时先替换选区
    pub fn insert_text(&mut self, s: &str) {
        self.push_snapshot();
        self.remove_selection_span();
        self.rope.insert(self.cursor, s);
        self.cursor += s.chars().count();
    }

    /// 复制选区文本；无选区时返回 None
    pub fn copy_selection(&self) -> Option<String> {
        if !self.has_selection() {
            return None;
        }
        self.selected_text()
    }

    /// 剪切选区文本；无选区时不修改缓冲区
    pub fn cut_selection(&mut self) -> Option<String> {
        let text = self.copy_selection()?;
        self.push_snapshot();
        self.remove_selection_span();
        Some(text)
    }

    /// 删除选区（不经过剪贴板），返回是否有修改
    pub fn delete_selection(&mut self) -> bool {
        self.cut_selection().is_some()
    }

    /// Backspace：有选区删选区，否则删光标前一个字素
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        self.anchor = None;
        let start = self.prev_boundary(self.cursor);
        if start == self.cursor {
            return false;
        }
        self.push_snapshot();
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete：有选区删选区，否则删光标后一个字素
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        self.anchor = None;
        let end = self.next_boundary(self.cursor);
        if end == self.cursor {
            return false;
        }
        self.push_snapshot();
        self.rope.remove(self.cursor..end);
        true
    }

    /// 删除光标前 `count` 个字符
    pub fn delete_before_cursor(&mut self, count: usize) -> String {
        let start = self.cursor.saturating_sub(count);
        if start == self.cursor {
            return String::new();
        }
        self.push_snapshot();
        self.anchor = None;
        let removed = self.rope.slice(start..self.cursor).to_string();
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        removed
    }

    // ==================== Undo ====================

    /// 恢复最近一次快照；历史为空时不做任何事
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.rope = snapshot.rope;
        self.cursor = snapshot.cursor.min(self.rope.len_chars());
        self.anchor = None;
        true
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            rope: self.rope.clone(),
            cursor: self.cursor,
        });
    }

    fn remove_selection_span(&mut self) {
        if let Some((start, end)) = self.selection() {
            if start < end {
                self.rope.remove(start..end);
            }
            self.cursor = start;
        }
        self.anchor = None;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
