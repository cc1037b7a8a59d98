//! termpad - 终端记事本
//!
//! 模块结构：
//! - models: 文本缓冲区与撤销历史
//! - core: 命令标识与按键类型
//! - kernel: 浮层栈、对话框协调、命令表与处理函数、设置与文件服务
//! - app: 事件循环、按键路由、菜单栏与渲染
//! - tui: 终端初始化 / 恢复与终止信号

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
