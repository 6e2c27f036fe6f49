// CLI層 - コマンドライン引数の定義と処理
// エントリーポイントと結合ロジックの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;

use clap::CommandFactory;

use crate::core::CombineError;
use crate::reporting::ResultReporter;
use crate::verification::default_scenarios;

/// 使い方の1行
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// 解析済みの引数で1回分の処理を実行し、終了コードを返す
///
/// 0: 成功 / 1: セルフチェック失敗・レポート出力失敗 / 2: 引数の数が不正
pub fn run<R>(cli: &Cli, reporter: &R) -> i32
where
    R: ResultReporter + ?Sized,
{
    let config = cli.to_config();

    let outcome = if cli.self_check {
        execute_self_check(&default_scenarios(), &config, reporter)
            .map(|report| if report.all_passed() { 0 } else { 1 })
    } else {
        execute_combine(&cli.values, &config, reporter).map(|_| 0)
    };

    match outcome {
        Ok(code) => code,
        Err(error) => {
            let usage = match error {
                CombineError::InvalidArgumentCount { .. } => usage(),
                CombineError::Report { .. } => String::new(),
            };
            reporter.report_error(&error, &usage);
            error.exit_code()
        }
    }
}
