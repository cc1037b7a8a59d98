//! 路径补全：为路径输入框提供候选与公共前缀补全

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCandidate {
    pub name: String,
    pub is_dir: bool,
}

fn split_input(input: &str) -> (&str, &str) {
    match input.rfind(|c| c == '/' || c == std::path::MAIN_SEPARATOR) {
        Some(idx) => (&input[..=idx], &input[idx + 1..]),
        None => ("", input),
    }
}

/// 列出 `input` 所在目录中以其末段为前缀的条目（按名称排序）
pub fn candidates(input: &str) -> Vec<PathCandidate> {
    let (dir_part, prefix) = split_input(input);
    let dir = if dir_part.is_empty() {
        Path::new(".")
    } else {
        Path::new(dir_part)
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let show_hidden = prefix.starts_with('.');
    let mut out: Vec<PathCandidate> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(prefix) || (!show_hidden && name.starts_with('.')) {
                return None;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            Some(PathCandidate { name, is_dir })
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// 按候选的最长公共前缀扩展输入；没有可补全内容时返回 None
pub fn complete(input: &str) -> Option<String> {
    let found = candidates(input);
    let first = found.first()?;
    let (dir_part, prefix) = split_input(input);

    let mut common: &str = &first.name;
    for cand in &found[1..] {
        let shared = common
            .char_indices()
            .zip(cand.name.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| common.len().min(cand.name.len()));
        common = &common[..shared];
    }

    let mut completed = format!("{dir_part}{common}");
    if found.len() == 1 && first.is_dir {
        completed.push('/');
    }

    if common.len() < prefix.len() || completed == input {
        return None;
    }
    Some(completed)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/path_complete.rs"]
mod tests;
