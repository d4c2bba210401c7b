use crate::error::{FetchError, Result};
use log::trace;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// 存储目录，负责快照与结果文件的布局和写入
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ---------- 文件布局 ----------
    pub fn questions_snapshot(&self) -> PathBuf {
        self.root.join("response").join("questions.json")
    }

    fn question_dir(&self, slug: &str) -> PathBuf {
        self.root.join("response").join("questions").join(slug)
    }

    pub fn question_snapshot(&self, slug: &str) -> PathBuf {
        self.question_dir(slug).join("question.json")
    }

    pub fn solutions_snapshot(&self, question_slug: &str) -> PathBuf {
        self.question_dir(question_slug).join("solutions.json")
    }

    pub fn solution_snapshot(&self, question_slug: &str, solution_slug: &str) -> PathBuf {
        self.question_dir(question_slug)
            .join("solutions")
            .join(format!("{}.json", solution_slug))
    }

    pub fn result_file(&self, slug: &str) -> PathBuf {
        self.root.join("result").join(format!("{}.json", slug))
    }

    /// 写入 UTF-8 文本，按需创建父目录，已存在的文件会被覆盖
    pub async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        trace!("写入文件: path={}", path.display());
        let io_err = |source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let mut file = File::create(path).await.map_err(io_err)?;
        file.write_all(contents.as_bytes()).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)?;
        Ok(())
    }
}
