//! Record syntax for course data files.
//!
//! One record per line: `NUMBER,TITLE[,PREREQUISITE]*`. No quoting, no
//! escaping, no header row. A line must carry at least a course number and a
//! title; anything after the title is a prerequisite course number, kept in
//! file order.

use crate::domain::{Course, CourseId};

/// A line held fewer than the two required fields (course number and title).
///
/// This is a per-line condition: the caller is expected to skip the offending
/// line and keep going, never to abort the load pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected at least 2 fields (course number, title), found {found}")]
pub struct MalformedRecord {
    /// How many fields the line actually held.
    pub found: usize,
}

/// Builds a course record from the fields of one already-split line.
///
/// Field 0 is the course number, field 1 the title, fields 2.. the
/// prerequisites in their original order. No further validation happens here:
/// empty numbers, repeated prerequisites, and references to unknown courses
/// all pass through untouched (see [`crate::domain::audit`]).
///
/// # Errors
///
/// Returns [`MalformedRecord`] when fewer than two fields are present.
pub fn parse_record(fields: &[&str]) -> Result<Course, MalformedRecord> {
    let [number, title, prerequisites @ ..] = fields else {
        return Err(MalformedRecord {
            found: fields.len(),
        });
    };

    Ok(Course::new(
        CourseId::from(*number),
        (*title).to_string(),
        prerequisites.iter().copied().map(CourseId::from).collect(),
    ))
}

/// Splits a raw line on `delimiter` and builds a course record from it.
///
/// # Errors
///
/// Returns [`MalformedRecord`] when the split yields fewer than two fields.
pub fn parse_line(line: &str, delimiter: char) -> Result<Course, MalformedRecord> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    parse_record(&fields)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[]; "no fields")]
    #[test_case(&["CS101"]; "number only")]
    fn too_few_fields_is_malformed(fields: &[&str]) {
        let error = parse_record(fields).unwrap_err();
        assert_eq!(error.found, fields.len());
    }

    #[test]
    fn two_fields_yield_a_course_without_prerequisites() {
        let course = parse_record(&["CS101", "Intro to CS"]).unwrap();

        assert_eq!(course.number().as_str(), "CS101");
        assert_eq!(course.title(), "Intro to CS");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn extra_fields_become_prerequisites_in_order() {
        let course = parse_record(&["CS101", "Intro to CS", "CS100", "MATH100"]).unwrap();

        assert_eq!(
            course.prerequisites(),
            &[CourseId::from("CS100"), CourseId::from("MATH100")]
        );
    }

    #[test]
    fn empty_fields_pass_through_unvalidated() {
        // A trailing comma produces an empty prerequisite; an empty first
        // field produces an empty course number. Both are preserved.
        let course = parse_record(&["CS101", "Intro to CS", ""]).unwrap();
        assert_eq!(course.prerequisites(), &[CourseId::from("")]);

        let course = parse_record(&["", "Untitled"]).unwrap();
        assert_eq!(course.number().as_str(), "");
    }

    #[test_case("CS300,Data Structures,CS200", &["CS200"]; "one prerequisite")]
    #[test_case("CS100,Intro to CS", &[]; "no prerequisites")]
    fn parse_line_splits_on_the_delimiter(line: &str, prerequisites: &[&str]) {
        let course = parse_line(line, ',').unwrap();

        let expected: Vec<CourseId> = prerequisites.iter().copied().map(CourseId::from).collect();
        assert_eq!(course.prerequisites(), expected.as_slice());
    }

    #[test]
    fn parse_line_honours_a_custom_delimiter() {
        let course = parse_line("CS200;Discrete Math;CS100", ';').unwrap();

        assert_eq!(course.number().as_str(), "CS200");
        assert_eq!(course.prerequisites(), &[CourseId::from("CS100")]);
    }

    #[test]
    fn blank_line_is_malformed() {
        // Splitting an empty string yields a single empty field.
        let error = parse_line("", ',').unwrap_err();
        assert_eq!(error.found, 1);
    }
}
