use crate::combiner::{coerce, combine_operands};
use crate::config::{OutputConfig, OutputFormat};
use crate::core::{format_float, CombineError, CombineResult, Combined, Operand};
use crate::reporting::ResultReporter;

/// 受け付ける値の個数
pub const EXPECTED_VALUES: usize = 2;

/// Combine exactly two command-line values and report the result line
pub fn execute_combine<C, R>(values: &[String], config: &C, reporter: &R) -> CombineResult<Combined>
where
    C: OutputConfig + ?Sized,
    R: ResultReporter + ?Sized,
{
    let [left, right] = values else {
        return Err(CombineError::invalid_argument_count(
            EXPECTED_VALUES,
            values.len(),
        ));
    };

    let operands = [coerce(left), coerce(right)];
    if config.verbose() {
        for (position, operand) in operands.iter().enumerate() {
            reporter.report_diagnostic(&describe_operand(position + 1, operand));
        }
    }

    let [a, b] = &operands;
    let combined = combine_operands(a, b);
    reporter.report_result(&render(&combined, &operands, config.output_format()));
    Ok(combined)
}

fn describe_operand(position: usize, operand: &Operand) -> String {
    match operand.number() {
        Some(n) => format!("value {position}: {:?} -> number {n}", operand.raw()),
        None => format!("value {position}: {:?} -> text", operand.raw()),
    }
}

fn render(combined: &Combined, operands: &[Operand; 2], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => combined.to_string(),
        OutputFormat::Json => {
            let value = match combined {
                // JSONの数値にできない nan / inf は文字列で出す
                Combined::Sum(n) if !n.is_finite() => serde_json::json!(format_float(*n)),
                Combined::Sum(n) => serde_json::json!(n),
                Combined::Concatenation(s) => serde_json::json!(s),
            };
            serde_json::json!({
                "kind": combined.kind(),
                "value": value,
                "inputs": [operands[0].raw(), operands[1].raw()],
            })
            .to_string()
        }
    }
}
