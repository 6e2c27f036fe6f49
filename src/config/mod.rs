// 実行設定
//
// コマンドライン引数から組み立てる。設定ファイルや環境変数は持たない。

use mockall::automock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 結合結果の出力形式
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// セルフチェックレポートの出力形式
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Junit,
    Text,
}

/// 出力設定を抽象化するトレイト
#[automock]
pub trait OutputConfig: Send + Sync {
    /// 結合結果の出力形式
    fn output_format(&self) -> OutputFormat;

    /// 強制変換の診断を出すかどうか
    fn verbose(&self) -> bool;

    /// セルフチェックレポートの出力形式
    fn report_format(&self) -> ReportFormat;

    /// セルフチェックレポートの書き出し先（`None` なら標準出力）
    fn report_output(&self) -> Option<PathBuf>;
}

/// デフォルト設定実装
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    output_format: OutputFormat,
    verbose: bool,
    report_format: ReportFormat,
    report_output: Option<PathBuf>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    pub fn with_report_output(mut self, path: Option<impl AsRef<Path>>) -> Self {
        self.report_output = path.map(|p| p.as_ref().to_path_buf());
        self
    }
}

impl OutputConfig for RunConfig {
    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn report_format(&self) -> ReportFormat {
        self.report_format
    }

    fn report_output(&self) -> Option<PathBuf> {
        self.report_output.clone()
    }
}
