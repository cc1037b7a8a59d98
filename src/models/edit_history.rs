//! 撤销历史：编辑前的整文快照栈
//!
//! Rope 克隆共享底层节点，快照成本与编辑量成正比而非文件大小。

use ropey::Rope;
use std::collections::VecDeque;

/// 默认保留的撤销步数
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

/// 编辑前的文本与光标
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub rope: Rope,
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct EditHistory {
    snapshots: VecDeque<Snapshot>,
    limit: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    /// `limit == 0` 表示不限制
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// 记录快照，超出上限时丢弃最旧的一条
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.limit > 0 && self.snapshots.len() >= self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}
