//! 业务逻辑服务层

mod task_list_service;

pub use task_list_service::TaskListService;
