//! 数据模型层

pub mod edit_history;
pub mod text_buffer;

pub use edit_history::{EditHistory, Snapshot, DEFAULT_UNDO_LIMIT};
pub use text_buffer::{slice_to_cow, TextBuffer};
