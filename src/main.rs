// ============================================================================
// TransDesk - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 加载配置、运行 CLI、设置退出码
//
// ============================================================================

use transdesk::cli::{run_cli, AlreadyReported};
use transdesk::models::config::Config;
use transdesk::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = Config::initialize() {
        Logger::error(format!("failed to load configuration: {:#}", e));
        std::process::exit(1);
    }

    if let Err(e) = run_cli().await {
        // 会话内的失败已经提示过
        if !e.is::<AlreadyReported>() {
            Logger::error(format!("{:#}", e));
        }
        std::process::exit(1);
    }
}
