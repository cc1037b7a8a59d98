//! 核心抽象
//!
//! - Command: 语义命令
//! - Event: 按键定义
//! - text_window: 单行文本横向滚动

pub mod command;
pub mod event;
pub mod text_window;

pub use command::Command;
pub use event::Key;
