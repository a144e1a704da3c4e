//! 界面组件

pub mod input_box;
pub mod modal;
pub mod statusbar;
pub mod task_list;
