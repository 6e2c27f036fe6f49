use clap::Parser;
use std::path::PathBuf;

use crate::config::{OutputFormat, ReportFormat, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "value_combiner")]
#[command(about = "Add two numbers, or concatenate them as text when either is not a number")]
#[command(version)]
pub struct Cli {
    /// The two values to combine (options go before the values)
    #[arg(value_name = "VALUE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,

    /// Output format for the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print how each value was interpreted (to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress informational messages on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Run the built-in scenario table and print a pass/fail report
    #[arg(long, conflicts_with = "values")]
    pub self_check: bool,

    /// Report format for --self-check
    #[arg(long, value_enum, default_value_t = ReportFormat::Json, requires = "self_check")]
    pub report_format: ReportFormat,

    /// Write the --self-check report to this file instead of stdout
    #[arg(long, requires = "self_check")]
    pub report_output: Option<PathBuf>,
}

impl Cli {
    /// 実行設定を組み立てる
    pub fn to_config(&self) -> RunConfig {
        RunConfig::new()
            .with_output_format(self.format)
            .with_verbose(self.verbose)
            .with_report_format(self.report_format)
            .with_report_output(self.report_output.as_ref())
    }
}
