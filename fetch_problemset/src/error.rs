use std::path::PathBuf;
use thiserror::Error;

/// 抓取过程中的错误，任何一种都会终止整个运行
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求发送失败（连接、超时、读取响应体等）
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 接口返回了非 2xx 状态码
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// 响应体不是合法 JSON，或无法映射到数据结构
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// 响应中缺少预期的字段
    #[error("missing field `{0}` in response")]
    MissingField(String),

    /// 写文件失败
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
