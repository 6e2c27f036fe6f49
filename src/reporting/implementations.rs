// 出力報告の実装群

use std::sync::{Arc, Mutex};

use super::ResultReporter;
use crate::core::CombineError;

/// コンソール出力による報告実装
///
/// 結果は標準出力、診断とエラーは標準エラー出力
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 診断メッセージを出さない
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ResultReporter for ConsoleReporter {
    fn report_result(&self, line: &str) {
        println!("{line}");
    }

    fn report_diagnostic(&self, message: &str) {
        if !self.quiet {
            eprintln!("[value_combiner] {message}");
        }
    }

    fn report_error(&self, error: &CombineError, usage: &str) {
        eprintln!("error: {error}");
        if !usage.is_empty() {
            eprintln!();
            eprintln!("{usage}");
        }
    }
}

/// 何もしない報告実装（ベンチマーク用）
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultReporter for NoOpReporter {
    fn report_result(&self, _line: &str) {}

    fn report_diagnostic(&self, _message: &str) {}

    fn report_error(&self, _error: &CombineError, _usage: &str) {}
}

/// メモリ上に出力を記録する報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    results: Arc<Mutex<Vec<String>>>,
    diagnostics: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<String> {
        Self::snapshot(&self.results)
    }

    pub fn diagnostics(&self) -> Vec<String> {
        Self::snapshot(&self.diagnostics)
    }

    pub fn errors(&self) -> Vec<String> {
        Self::snapshot(&self.errors)
    }

    fn snapshot(lines: &Mutex<Vec<String>>) -> Vec<String> {
        lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn push(lines: &Mutex<Vec<String>>, line: String) {
        if let Ok(mut lines) = lines.lock() {
            lines.push(line);
        }
    }
}

impl ResultReporter for MemoryReporter {
    fn report_result(&self, line: &str) {
        Self::push(&self.results, line.to_string());
    }

    fn report_diagnostic(&self, message: &str) {
        Self::push(&self.diagnostics, message.to_string());
    }

    fn report_error(&self, error: &CombineError, _usage: &str) {
        Self::push(&self.errors, error.to_string());
    }
}
