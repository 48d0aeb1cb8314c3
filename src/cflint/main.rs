use clap::Parser;
use colored::*;
use log::{debug, error};

use cflint::error::Result;
use cflint::formatter::ClangFormatter;
use cflint::git::{self, FileMode};
use cflint::lint::{self, FileReport, LintSummary};
use cflint::runner::system::SystemRunner;
use cflint::runner::RunCommand;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let formatter = ClangFormatter::new(SystemRunner, cli.clang_format_path.as_deref())?;

    let mode = if cli.all_files {
        FileMode::All
    } else {
        FileMode::Changed
    };
    let files = git::source_files(formatter.runner(), mode)?;

    // Every candidate is linted and reported; only the exit code aggregates.
    let mut summary = LintSummary::new();
    for file in &files {
        let report = lint::lint_file(&formatter, file)?;
        print_report(&formatter, &report, cli.print_output);
        summary.record(&report);
    }
    debug!(
        "{} of {} file(s) need formatting",
        summary.misformatted(),
        summary.checked()
    );

    Ok(summary.all_formatted())
}

/// Level comes from `--verbose`; `RUST_LOG` still wins when set. Logs go to
/// stdout, like every other line this tool prints.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .target(env_logger::Target::Stdout)
        .init();
}

fn print_report<R: RunCommand>(
    formatter: &ClangFormatter<R>,
    report: &FileReport,
    print_output: bool,
) {
    if report.is_formatted() {
        return;
    }

    println!("Found formatting changes for file: {}", report.file.display());
    if print_output {
        println!("To fix, run \"{}\"", formatter.fix_command(&report.file));
        println!("Suggested changes:");
        for line in &report.diff {
            println!("{}", style_diff_line(line.trim_end()));
        }
        println!();
    }
}

fn style_diff_line(line: &str) -> ColoredString {
    if line.starts_with("@@") {
        line.dimmed()
    } else if line.starts_with('+') {
        line.green()
    } else if line.starts_with('-') {
        line.red()
    } else {
        line.normal()
    }
}
