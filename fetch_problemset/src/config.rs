use dotenv::dotenv;
use log::debug;
use std::env;
use std::path::PathBuf;

// ---------- 常量定义 ----------
pub const DEFAULT_BASE_URL: &str = "https://leetcode-cn.com";
pub const DEFAULT_STORAGE_DIR: &str = "storage";

const BASE_URL_VAR: &str = "LEETCODE_BASE_URL";
const STORAGE_DIR_VAR: &str = "FETCH_STORAGE_DIR";

/// 运行配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 站点根地址，列表接口、GraphQL 接口以及 Origin/Referer 都由它拼出
    pub base_url: String,
    /// 快照与结果文件的存储根目录
    pub storage_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_STORAGE_DIR)
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>, storage_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            storage_dir: storage_dir.into(),
        }
    }

    /// 从环境变量（以及 .env 文件）读取配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        dotenv().ok(); // 加载.env文件

        let config = Self::new(
            env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            env::var(STORAGE_DIR_VAR).unwrap_or_else(|_| DEFAULT_STORAGE_DIR.into()),
        );
        debug!(
            "配置加载完成: base_url={}, storage_dir={}",
            config.base_url,
            config.storage_dir.display()
        );
        config
    }
}
