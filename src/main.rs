use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use quay_verify::{
    checker::ConstraintChecker, models::TerminalConfig, record::parse_schedule,
    validation::validate_input,
};

/// Verify a berth allocation and quay crane assignment schedule.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Schedule file, one vessel per line (`-` reads stdin)
    schedule: PathBuf,

    /// Terminal configuration (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run(self) -> anyhow::Result<ExitCode> {
        setup_logging(self.verbose);

        let config = TerminalConfig::load(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;
        let text = read_schedule(&self.schedule)?;
        let outcome = verify_schedule(&text, &config, self.json)
            .with_context(|| format!("checking {}", self.schedule.display()))?;

        print!("{}", outcome.output);
        Ok(if outcome.feasible {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Rendered verdict of one run.
#[derive(Debug)]
struct Outcome {
    feasible: bool,
    output: String,
}

/// Parses, validates and checks a schedule, rendering the report.
///
/// Input errors (parse or validation) are returned as `Err`; an infeasible
/// schedule is a successful run with `feasible == false`.
fn verify_schedule(text: &str, config: &TerminalConfig, json: bool) -> anyhow::Result<Outcome> {
    let vessels = parse_schedule(text)?;

    if let Err(errors) = validate_input(&vessels, config) {
        for error in &errors {
            tracing::error!("{error}");
        }
        anyhow::bail!("{} input error(s), schedule not checked", errors.len());
    }

    let report = ConstraintChecker::new(config).check(&vessels)?;

    let output = if json {
        format!("{}\n", serde_json::to_string_pretty(&report)?)
    } else {
        let mut out = format!("Constraint Checks: {}\n", report.result);
        for finding in &report.findings {
            out.push_str(&format!("  - {finding}\n"));
        }
        out
    };

    Ok(Outcome {
        feasible: report.is_feasible(),
        output,
    })
}

fn read_schedule(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading schedule from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    Cli::parse().run()
}
