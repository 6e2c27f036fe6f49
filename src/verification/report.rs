// セルフチェックレポートと出力フォーマッタ
//
// JSON・JUnit XML・テキストの3形式。ビルド/テストランナーが読むのはJSONかJUnit。

use serde::{Deserialize, Serialize};

use super::scenarios::Scenario;
use crate::config::ReportFormat;
use crate::core::{CombineResult, Combined};

/// 1ケースの判定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed { actual: Combined },
}

/// 1ケース分のレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    #[serde(flatten)]
    pub scenario: Scenario,
    pub outcome: CaseOutcome,
    pub duration_us: u64,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed)
    }
}

/// セルフチェック全体のレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub tool: String,
    pub version: String,
    pub timestamp: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl VerificationReport {
    pub fn new(cases: Vec<CaseReport>) -> Self {
        let passed = cases.iter().filter(|c| c.passed()).count();
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> Vec<&CaseReport> {
        self.cases.iter().filter(|c| !c.passed()).collect()
    }

    fn total_duration_secs(&self) -> f64 {
        self.cases.iter().map(|c| c.duration_us as f64).sum::<f64>() / 1_000_000.0
    }
}

/// レポートを文字列に整形するトレイト
pub trait ReportFormatter {
    fn format(&self, report: &VerificationReport) -> CombineResult<String>;
}

/// JSON形式
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &VerificationReport) -> CombineResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// JUnit XML形式
#[derive(Debug, Default)]
pub struct JunitFormatter;

impl JunitFormatter {
    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }

    fn describe(result: &Combined) -> String {
        format!("{} {:?}", result.kind(), result.to_string())
    }
}

impl ReportFormatter for JunitFormatter {
    fn format(&self, report: &VerificationReport) -> CombineResult<String> {
        let suite = Self::escape_xml(&report.tool);
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\" time=\"{:.6}\">\n",
            report.total,
            report.failed,
            report.total_duration_secs()
        ));
        output.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" timestamp=\"{}\" time=\"{:.6}\">\n",
            suite,
            report.total,
            report.failed,
            Self::escape_xml(&report.timestamp),
            report.total_duration_secs()
        ));

        for case in &report.cases {
            output.push_str(&format!(
                "    <testcase name=\"{}\" classname=\"{}.combine\" time=\"{:.6}\"",
                Self::escape_xml(&case.scenario.name),
                suite,
                case.duration_us as f64 / 1_000_000.0
            ));

            match &case.outcome {
                CaseOutcome::Passed => output.push_str(" />\n"),
                CaseOutcome::Failed { actual } => {
                    output.push_str(">\n");
                    let call = format!(
                        "combine({:?}, {:?})",
                        case.scenario.left, case.scenario.right
                    );
                    output.push_str(&format!(
                        "      <failure message=\"{}\">expected {}, got {}</failure>\n",
                        Self::escape_xml(&call),
                        Self::escape_xml(&Self::describe(&case.scenario.expected)),
                        Self::escape_xml(&Self::describe(actual))
                    ));
                    output.push_str("    </testcase>\n");
                }
            }
        }

        output.push_str("  </testsuite>\n");
        output.push_str("</testsuites>\n");
        Ok(output)
    }
}

/// 人間向けテキスト形式
#[derive(Debug, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &VerificationReport) -> CombineResult<String> {
        let mut output = String::new();
        for case in &report.cases {
            let status = if case.passed() { "PASS" } else { "FAIL" };
            output.push_str(&format!(
                "{status} {} combine({:?}, {:?}) = {}\n",
                case.scenario.name, case.scenario.left, case.scenario.right, case.scenario.expected
            ));
            if let CaseOutcome::Failed { actual } = &case.outcome {
                output.push_str(&format!("     got {actual}\n"));
            }
        }
        output.push_str(&format!(
            "{} passed, {} failed, {} total\n",
            report.passed, report.failed, report.total
        ));
        Ok(output)
    }
}

/// 出力形式に応じたフォーマッタを取得
pub fn get_formatter(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Json => Box::new(JsonFormatter),
        ReportFormat::Junit => Box::new(JunitFormatter),
        ReportFormat::Text => Box::new(TextFormatter),
    }
}
