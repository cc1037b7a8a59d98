//! 用户设置：`<cache>/.termpad/settings.json`
//!
//! 文件缺失时写入默认值；解析失败时退回默认值并记录 warn，不阻断启动。

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::models::DEFAULT_UNDO_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".termpad";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    #[serde(default)]
    pub search_ignore_case: bool,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

fn default_tab_size() -> u8 {
    4
}

fn default_undo_limit() -> usize {
    DEFAULT_UNDO_LIMIT
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            undo_limit: default_undo_limit(),
            show_status_bar: true,
            search_ignore_case: false,
            keybindings: Vec::new(),
        }
    }
}

impl Settings {
    /// 缩进宽度，至少为 1
    pub fn tab_width(&self) -> usize {
        usize::from(self.tab_size.max(1))
    }
}

pub fn settings_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR))
}

/// `<cache>/.termpad/logs`，不存在时创建
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = settings_dir()
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine cache directory")
        })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn get_settings_path() -> Option<PathBuf> {
    settings_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_at(&path)?;
    Ok(path)
}

pub fn ensure_settings_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

/// 读取默认位置的设置（必要时先创建）
pub fn load_settings() -> Settings {
    match ensure_settings_file() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "settings file unavailable, using defaults");
            Settings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings");
            return Settings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
            Settings::default()
        }
    }
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            _ => key_part = Some(part),
        }
    }
    let mut code = parse_key_code(key_part?)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let lower = v.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if lower.len() > 1 && lower.starts_with('f') => {
            KeyCode::F(lower[1..].parse::<u8>().ok()?)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/settings.rs"]
mod tests;
