use anyhow::Result;
use clap::Parser;
use std::io::Write;

use value_combiner::cli::{run, Cli};
use value_combiner::reporting::ConsoleReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reporter = if cli.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };

    let code = run(&cli, &reporter);
    std::io::stdout().flush()?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
