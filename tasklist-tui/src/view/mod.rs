//! View 层：UI 渲染
//!
//! 只读取 Model，每一帧都从任务列表重新生成所有行。

mod components;
mod layout;
pub mod theme;

pub use layout::{render, AppAreas};
