use anyhow::{Context, Result};
use fetch_problemset::{Config, Crawler, LeetCodeClient, Storage};
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();

    if let Err(e) = run().await {
        error!("抓取失败: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env();
    let client = LeetCodeClient::new(&config);
    let storage = Storage::new(&config.storage_dir);

    let summary = Crawler::new(client, storage)
        .run()
        .await
        .with_context(|| format!("从 {} 抓取题库失败", config.base_url))?;

    info!(
        "完成: 题目 {} 道, 题解 {} 篇, 输出目录 {}",
        summary.questions,
        summary.solutions,
        config.storage_dir.display()
    );
    Ok(())
}

/// 初始化 env_logger 配置
fn init_logger() {
    use env_logger::{Builder, Target};

    Builder::new()
        // 默认 INFO，进度日志都在这个级别
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .format_module_path(true)
        .format_level(true)
        .target(Target::Stdout)
        // 允许通过 RUST_LOG 环境变量覆盖配置
        .parse_env("RUST_LOG")
        .init();
}
