//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是界面状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的状态转换，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Input / List）
//!         mod input;          // 输入框状态机（Idle / Composing）
//!         mod list;           // 列表选中项
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub focus: FocusPanel,
//!             pub state: AppState,                // tasklist-app：任务列表 + 配色 + 视口
//!             pub input: InputState,
//!             pub list: ListState,
//!             pub list_area: Rect,                // 列表在屏幕上的位置，鼠标点击用
//!             pub status_message: Option<String>,
//!             pub modal: ModalState,
//!         }
//!
//!     任务的顺序只由 `state.tasks`（TaskListService）决定；
//!     界面上的行每一帧都从它重新生成，不保存任何可变的行数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、输入框（InputState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Idle ──输入字符──▶ Composing { buffer, cursor }
//!          ▲                          │
//!          └──── Enter 提交 / 删空 ───┘
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - ConfirmDelete { entry, focus }
//!             - Help
//!             - Error { title, message }
//!
//!     弹窗打开时所有输入都交给弹窗处理，其他修改列表的操作无法到达 Model。
//!

mod app;
mod focus;
mod input;
mod list;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use input::InputState;
pub use list::ListState;
pub use state::{Modal, ModalState};
