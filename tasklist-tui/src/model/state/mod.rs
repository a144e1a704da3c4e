//! 界面状态

mod modal;

pub use modal::{Modal, ModalState};
