// セルフチェック用シナリオと実行

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::report::{CaseOutcome, CaseReport, VerificationReport};
use crate::combiner::combine_args;
use crate::core::Combined;

/// 和の比較に使う許容誤差
pub const SUM_TOLERANCE: f64 = 1e-9;

/// 入力2つと期待結果の組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub left: String,
    pub right: String,
    pub expected: Combined,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        expected: Combined,
    ) -> Self {
        Self {
            name: name.into(),
            left: left.into(),
            right: right.into(),
            expected,
        }
    }

    pub fn sum(name: &str, left: &str, right: &str, expected: f64) -> Self {
        Self::new(name, left, right, Combined::Sum(expected))
    }

    pub fn concatenation(name: &str, left: &str, right: &str, expected: &str) -> Self {
        Self::new(
            name,
            left,
            right,
            Combined::Concatenation(expected.to_string()),
        )
    }

    /// シナリオを実行して結果を判定
    pub fn run(&self) -> CaseReport {
        let started = Instant::now();
        let actual = combine_args(&self.left, &self.right);
        let duration_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        let outcome = if matches_expected(&self.expected, &actual) {
            CaseOutcome::Passed
        } else {
            CaseOutcome::Failed { actual }
        };

        CaseReport {
            scenario: self.clone(),
            outcome,
            duration_us,
        }
    }
}

/// 期待結果と一致するか（和は許容誤差付きで比較）
pub fn matches_expected(expected: &Combined, actual: &Combined) -> bool {
    match (expected, actual) {
        (Combined::Sum(e), Combined::Sum(a)) => {
            (e.is_nan() && a.is_nan()) || e == a || (e - a).abs() < SUM_TOLERANCE
        }
        (Combined::Concatenation(e), Combined::Concatenation(a)) => e == a,
        _ => false,
    }
}

/// 組み込みのシナリオ表
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::sum("add_integers", "5", "3", 8.0),
        Scenario::sum("add_decimals", "10.5", "7.3", 17.8),
        Scenario::sum("add_negative", "-5", "3", -2.0),
        Scenario::concatenation("concat_strings", "Hello", "World", "HelloWorld"),
        Scenario::concatenation("concat_text_and_number", "Number", "42", "Number42"),
        Scenario::concatenation("concat_number_and_text", "42", "Number", "42Number"),
        Scenario::sum("add_exponent", "1e3", "1", 1001.0),
        Scenario::sum("add_padded_numbers", " 2 ", "2", 4.0),
        Scenario::concatenation("concat_keeps_original_text", "42.0", "x", "42.0x"),
        Scenario::concatenation("concat_empty", "", "", ""),
    ]
}

/// シナリオ群を実行してレポートを作成
pub fn run_scenarios(scenarios: &[Scenario]) -> VerificationReport {
    let cases = scenarios.iter().map(Scenario::run).collect();
    VerificationReport::new(cases)
}
