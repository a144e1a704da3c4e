//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // 从任务列表重新生成所有行
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {         // 等待输入，最长 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg).await     // 存储操作在此完成后才处理下一个事件
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    // 0. 按当前终端大小初始化视口
    let size = terminal.size()?;
    update::update(
        app,
        AppMessage::Resize {
            width: size.width,
            height: size.height,
        },
    )
    .await;

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg).await;
        }
    }

    Ok(())
}
