use std::{path::PathBuf, process};

use catalog::{Catalog, Config, Course, CourseId};
use clap::Parser;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `courses show`.
#[derive(Debug, Parser)]
#[command(about = "Display detailed information about a course")]
pub struct Show {
    /// The course number to display
    #[clap(value_parser = super::parse_course_number)]
    number: CourseId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_for_command(file, config)?;

        let Some(course) = catalog.get(self.number.as_str()) else {
            eprintln!("Course {} not found", self.number);
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => output_pretty(&catalog, course),
            OutputFormat::Json => output_json(course)?,
        }

        Ok(())
    }
}

fn output_pretty(catalog: &Catalog, course: &Course) {
    println!("{}: {}", course.number(), course.title());

    if course.prerequisites().is_empty() {
        println!("Prerequisites: None");
        return;
    }

    println!("{}", "Prerequisites".dim());
    for prerequisite in course.prerequisites() {
        if catalog.get(prerequisite.as_str()).is_some() {
            println!("  • {prerequisite}");
        } else {
            println!("  • {prerequisite} {}", "(not in catalog)".warning());
        }
    }
}

fn output_json(course: &Course) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(course)?);
    Ok(())
}
