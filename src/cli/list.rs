use std::path::PathBuf;

use anyhow::Context;
use catalog::{Config, Course, CourseId};
use clap::{Parser, ValueEnum};
use regex::Regex;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `courses list`.
#[derive(Debug, Parser)]
#[command(about = "Print every course in alphanumeric order")]
pub struct List {
    /// Case-insensitive substring match against course number or title.
    #[arg(long, conflicts_with = "regex")]
    contains: Option<String>,

    /// Regular expression match against course number or title.
    #[arg(long)]
    regex: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and color for scripting.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

enum Filter {
    All,
    Contains(String),
    Regex(Regex),
}

impl Filter {
    fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Contains(needle) => {
                course.number().as_str().to_lowercase().contains(needle)
                    || course.title().to_lowercase().contains(needle)
            }
            Self::Regex(pattern) => {
                pattern.is_match(course.number()) || pattern.is_match(course.title())
            }
        }
    }
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_for_command(file, config)?;
        let filter = self.filter()?;

        let courses: Vec<&Course> = catalog
            .iter()
            .filter(|course| filter.matches(course))
            .collect();

        match self.output {
            OutputFormat::Table => self.output_table(&courses),
            OutputFormat::Json => output_json(&courses)?,
            OutputFormat::Csv => output_csv(&courses, config.delimiter()),
        }

        Ok(())
    }

    fn filter(&self) -> anyhow::Result<Filter> {
        if let Some(needle) = &self.contains {
            Ok(Filter::Contains(needle.to_lowercase()))
        } else if let Some(pattern) = &self.regex {
            Ok(Filter::Regex(
                Regex::new(pattern).context("invalid --regex pattern")?,
            ))
        } else {
            Ok(Filter::All)
        }
    }

    fn output_table(&self, courses: &[&Course]) {
        if courses.is_empty() {
            println!("No courses matched.");
            return;
        }

        if self.quiet {
            for course in courses {
                println!("{}\t{}", course.number(), course.title());
            }
            return;
        }

        let number_width = courses
            .iter()
            .map(|c| c.number().as_str().len())
            .max()
            .unwrap_or(0)
            .max("NUMBER".len());

        // Narrow terminals drop the prerequisites column.
        if is_narrow() {
            println!("{}", format!("{:<number_width$}  TITLE", "NUMBER").dim());
            for course in courses {
                println!("{:<number_width$}  {}", course.number().as_str(), course.title());
            }
            return;
        }

        let title_width = courses
            .iter()
            .map(|c| c.title().len())
            .max()
            .unwrap_or(0)
            .max("TITLE".len());

        println!(
            "{}",
            format!("{:<number_width$}  {:<title_width$}  PREREQUISITES", "NUMBER", "TITLE").dim()
        );
        for course in courses {
            println!(
                "{:<number_width$}  {:<title_width$}  {}",
                course.number().as_str(),
                course.title(),
                prerequisites_cell(course)
            );
        }
    }
}

fn prerequisites_cell(course: &Course) -> String {
    if course.prerequisites().is_empty() {
        "-".to_string()
    } else {
        let listed: Vec<&str> = course
            .prerequisites()
            .iter()
            .map(CourseId::as_str)
            .collect();
        listed.join(" ")
    }
}

fn output_json(courses: &[&Course]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(courses)?);
    Ok(())
}

fn output_csv(courses: &[&Course], delimiter: char) {
    let separator = delimiter.to_string();
    for course in courses {
        let mut fields = vec![course.number().as_str(), course.title()];
        fields.extend(course.prerequisites().iter().map(CourseId::as_str));
        println!("{}", fields.join(&separator));
    }
}
