//! 剪贴板：进程内单槽，保存最近一次剪切 / 复制的文本

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    text: Option<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: String) {
        tracing::debug!(chars = text.chars().count(), "clipboard set");
        self.text = Some(text);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}
