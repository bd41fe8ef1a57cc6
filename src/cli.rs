use std::path::{Path, PathBuf};

mod list;
mod menu;
mod show;
mod terminal;
mod validate;

use catalog::{Catalog, Config, CourseId, storage};
use clap::ArgAction;
use list::List;
use show::Show;
use validate::Validate;

/// Parse a course number from the command line, normalizing to uppercase.
///
/// This is a CLI boundary function: the catalog compares numbers
/// byte-for-byte, but data files write them in uppercase, so lowercase
/// input is normalized here before any lookup.
fn parse_course_number(s: &str) -> Result<CourseId, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("course number must not be empty".to_string());
    }
    Ok(CourseId::from(trimmed.to_uppercase()))
}

/// Top-level command-line arguments.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The course data file (overrides `data_file` from the config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// The configuration file
    #[arg(long, default_value = "courses.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Dispatch to the selected subcommand, defaulting to the interactive
    /// menu.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(&self.config);

        self.command
            .unwrap_or(Command::Menu)
            .run(self.file, &config)
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
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The available subcommands.
#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Interactive advising menu (default)
    Menu,

    /// Print every course in alphanumeric order
    List(List),

    /// Show details for a single course
    Show(Show),

    /// Check catalog health
    ///
    /// Reports prerequisite references that are not in the catalog,
    /// duplicated course numbers, and circular prerequisite chains.
    Validate(Validate),
}

impl Command {
    fn run(self, file: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Menu => menu::run(file.as_deref(), config)?,
            Self::List(command) => command.run(file, config)?,
            Self::Show(command) => command.run(file, config)?,
            Self::Validate(command) => command.run(file, config)?,
        }
        Ok(())
    }
}

fn load_config(path: &Path) -> Config {
    Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Load the catalog for a non-interactive command.
///
/// Resolves the data file from `--file` or the config, and logs a warning
/// for every malformed line the pass skipped.
fn load_for_command(file: Option<PathBuf>, config: &Config) -> anyhow::Result<Catalog> {
    let path = file
        .or_else(|| config.data_file().map(Path::to_path_buf))
        .ok_or_else(|| {
            anyhow::anyhow!("no course data file: pass --file or set `data_file` in courses.toml")
        })?;

    let report = storage::load_catalog(&path, config)?;
    for skipped in &report.skipped {
        tracing::warn!(
            "{}: skipped malformed line {}: {}",
            path.display(),
            skipped.line,
            skipped.reason
        );
    }

    Ok(report.catalog)
}
