use std::{
    io::{self, BufRead, Lines, StdinLock},
    path::Path,
};

use catalog::{Catalog, Config, Course, CourseId, storage};
use tracing::instrument;

use super::terminal::Colorize;

/// State for one menu run: the catalog currently loaded, if any.
///
/// The listing and detail options refuse until a load has succeeded. A
/// successful re-load replaces the catalog wholesale; a failed one keeps the
/// previous data.
#[derive(Debug, Default)]
struct Session {
    catalog: Option<Catalog>,
}

type InputLines<'a> = Lines<StdinLock<'a>>;

/// Run the interactive advising menu until the user exits or stdin is
/// closed. This is the default command.
#[instrument(level = "debug", skip_all)]
pub fn run(file: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::default();

    loop {
        print_menu();
        eprint!("Enter your choice: ");
        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match choice.trim() {
            "1" => load(&mut session, file, config, &mut lines)?,
            "2" => print_all(&session),
            "3" => print_course(&session, &mut lines)?,
            "9" => {
                println!("Exiting program.");
                break;
            }
            _ => println!("Invalid choice. Please select a valid option."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("  1. Load course data");
    println!("  2. Print alphanumeric list of all courses");
    println!("  3. Print course details");
    println!("  9. Exit");
}

fn next_line(lines: &mut InputLines<'_>) -> io::Result<Option<String>> {
    lines.next().transpose()
}

fn load(
    session: &mut Session,
    default_file: Option<&Path>,
    config: &Config,
    lines: &mut InputLines<'_>,
) -> anyhow::Result<()> {
    eprint!("Enter the filename containing course data: ");
    let Some(input) = next_line(lines)? else {
        return Ok(());
    };

    let path = if input.trim().is_empty() {
        let Some(default) = default_file.or_else(|| config.data_file()) else {
            println!("{}", "No filename given.".warning());
            return Ok(());
        };
        default.to_path_buf()
    } else {
        storage::normalize_path(&input)
    };

    match storage::load_catalog(&path, config) {
        Ok(report) => {
            for skipped in &report.skipped {
                println!(
                    "{}",
                    format!("Skipping malformed line {}: {}", skipped.line, skipped.reason)
                        .warning()
                );
            }
            println!(
                "{}",
                format!(
                    "Loaded {} courses from {}",
                    report.catalog.len(),
                    path.display()
                )
                .success()
            );
            session.catalog = Some(report.catalog);
        }
        Err(e) => println!("{}", format!("Failed to load course data: {e}").error()),
    }

    Ok(())
}

fn print_all(session: &Session) {
    let Some(catalog) = &session.catalog else {
        println!("{}", "No data loaded. Load course data first.".warning());
        return;
    };

    println!("Courses in alphanumeric order:");
    for course in catalog {
        println!("{}: {}", course.number(), course.title());
        print_prerequisites(course);
    }
}

fn print_course(session: &Session, lines: &mut InputLines<'_>) -> anyhow::Result<()> {
    let Some(catalog) = &session.catalog else {
        println!("{}", "No data loaded. Load course data first.".warning());
        return Ok(());
    };

    eprint!("Enter the course number: ");
    let Some(input) = next_line(lines)? else {
        return Ok(());
    };

    let number = match super::parse_course_number(&input) {
        Ok(number) => number,
        Err(e) => {
            println!("{}", e.warning());
            return Ok(());
        }
    };

    match catalog.get(number.as_str()) {
        Some(course) => {
            println!("Course Number: {}", course.number());
            println!("Course Title: {}", course.title());
            print_prerequisites(course);
        }
        None => println!("{}", format!("Course {number} not found.").warning()),
    }

    Ok(())
}

fn print_prerequisites(course: &Course) {
    if course.prerequisites().is_empty() {
        println!("Prerequisites: None");
    } else {
        let listed: Vec<&str> = course
            .prerequisites()
            .iter()
            .map(CourseId::as_str)
            .collect();
        println!("Prerequisites: {}", listed.join(" "));
    }
}
