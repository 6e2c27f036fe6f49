// 出力報告のトレイト定義

use mockall::automock;

use crate::core::CombineError;

/// 結果・診断・エラーの出力先を抽象化するトレイト
#[automock]
pub trait ResultReporter: Send + Sync {
    /// 結合結果の報告（1行）
    fn report_result(&self, line: &str);

    /// 診断メッセージの報告（強制変換の詳細など）
    fn report_diagnostic(&self, message: &str);

    /// エラー発生時の報告
    fn report_error(&self, error: &CombineError, usage: &str);
}

