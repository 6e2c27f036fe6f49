// エラー型定義
// 結合処理そのものは失敗しない。失敗するのは引数の数とレポート出力だけ

use thiserror::Error;

/// 結合ツールのエラー型
#[derive(Error, Debug)]
pub enum CombineError {
    #[error("invalid argument count: expected {expected} values, got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },

    #[error("failed to write self-check report: {source}")]
    Report {
        #[source]
        source: anyhow::Error,
    },
}

impl CombineError {
    /// 引数の数エラーの作成
    pub fn invalid_argument_count(expected: usize, actual: usize) -> Self {
        Self::InvalidArgumentCount { expected, actual }
    }

    /// レポート出力エラーの作成
    pub fn report(source: impl Into<anyhow::Error>) -> Self {
        Self::Report {
            source: source.into(),
        }
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgumentCount { .. } => 2,
            Self::Report { .. } => 1,
        }
    }
}

impl From<std::io::Error> for CombineError {
    fn from(error: std::io::Error) -> Self {
        Self::report(error)
    }
}

impl From<serde_json::Error> for CombineError {
    fn from(error: serde_json::Error) -> Self {
        Self::report(error)
    }
}

/// 結合ツールの結果型
pub type CombineResult<T> = std::result::Result<T, CombineError>;
