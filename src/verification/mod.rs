// セルフチェック
//
// 固定の入出力ペアで結合ロジックを検証し、機械可読なレポートを出す。
// ビルド/テスト/パッケージングのランナーはこのレポートを取り込む。

pub mod report;
pub mod scenarios;

// 公開API
pub use report::{
    get_formatter, CaseOutcome, CaseReport, JsonFormatter, JunitFormatter, ReportFormatter,
    TextFormatter, VerificationReport,
};
pub use scenarios::{default_scenarios, matches_expected, run_scenarios, Scenario};
