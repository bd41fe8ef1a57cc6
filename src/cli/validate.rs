use std::{path::PathBuf, process};

use catalog::{Config, CourseId, domain::audit};
use clap::{Parser, ValueEnum};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `courses validate`.
#[derive(Debug, Parser)]
#[command(about = "Check catalog health: unknown prerequisites, duplicates, cycles")]
pub struct Validate {
    /// Output format (default: table)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Print only the issue count
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

impl Validate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_for_command(file, config)?;
        let report = audit::audit(&catalog);

        match self.output {
            OutputFormat::Table => self.output_table(&report),
            OutputFormat::Json => output_json(&report)?,
            OutputFormat::Summary => output_summary(&report),
        }

        // Exit with a non-zero code when the catalog needs attention.
        if !report.is_clean() {
            process::exit(2);
        }

        Ok(())
    }

    fn output_table(&self, report: &audit::AuditReport) {
        if self.quiet {
            println!("{}", report.issue_count());
            return;
        }

        if report.is_clean() {
            println!("{}", "No issues found.".success());
            return;
        }

        if !report.missing_prerequisites.is_empty() {
            println!("{}", "Unknown prerequisites".dim());
            for finding in &report.missing_prerequisites {
                println!(
                    "  {} requires {}, which is not in the catalog",
                    finding.course, finding.prerequisite
                );
            }
        }

        if !report.duplicate_numbers.is_empty() {
            println!("{}", "Duplicate course numbers".dim());
            for number in &report.duplicate_numbers {
                println!(
                    "  {number} appears more than once; only the first record is reachable by lookup"
                );
            }
        }

        if !report.prerequisite_cycles.is_empty() {
            println!("{}", "Prerequisite cycles".dim());
            for cycle in &report.prerequisite_cycles {
                println!("  {}", format_cycle(cycle));
            }
        }

        println!();
        println!("{}", format!("{} issues found", report.issue_count()).warning());
    }
}

fn format_cycle(cycle: &[CourseId]) -> String {
    let numbers: Vec<&str> = cycle.iter().map(CourseId::as_str).collect();
    numbers.join(" → ")
}

fn output_json(report: &audit::AuditReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn output_summary(report: &audit::AuditReport) {
    println!("unknown prerequisites: {}", report.missing_prerequisites.len());
    println!("duplicate numbers:     {}", report.duplicate_numbers.len());
    println!("prerequisite cycles:   {}", report.prerequisite_cycles.len());
}
