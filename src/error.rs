use thiserror::Error;

// 启动阶段的错误；游戏循环内部没有可失败的操作
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{op} failed for {path}: {message}")]
    Asset {
        op: &'static str,
        path: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tuning parse error: {0}")]
    Tuning(#[from] serde_json::Error),
}

impl GameError {
    // 包装图形库返回的错误信息
    pub fn asset(op: &'static str, path: &str, err: impl std::fmt::Debug) -> Self {
        Self::Asset {
            op,
            path: path.to_string(),
            message: format!("{err:?}"),
        }
    }
}
