//! Referential health checks over a loaded catalog.
//!
//! The parser and the index deliberately accept whatever the data file says:
//! unknown prerequisite references, repeated course numbers, and circular
//! prerequisite chains all load without complaint. This module is where those
//! conditions become visible. The audit is read-only: it reports, it never
//! repairs.

use petgraph::{algo::tarjan_scc, graphmap::DiGraphMap};
use serde::Serialize;

use crate::domain::{Catalog, CourseId};

/// A prerequisite reference that does not resolve to any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPrerequisite {
    /// The course carrying the reference.
    pub course: CourseId,
    /// The referenced number that is not in the catalog.
    pub prerequisite: CourseId,
}

/// Findings from [`audit`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Prerequisite references that fail exact-match lookup.
    pub missing_prerequisites: Vec<MissingPrerequisite>,

    /// Course numbers stored more than once. Lookup only ever reaches the
    /// first-inserted record for such a number; the later ones are shadowed.
    pub duplicate_numbers: Vec<CourseId>,

    /// Strongly-connected components of the prerequisite graph, each sorted
    /// by course number. A single-element cycle is a course listing itself
    /// as its own prerequisite.
    pub prerequisite_cycles: Vec<Vec<CourseId>>,
}

impl AuditReport {
    /// Whether the audit found nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_prerequisites.is_empty()
            && self.duplicate_numbers.is_empty()
            && self.prerequisite_cycles.is_empty()
    }

    /// Total number of findings across all categories.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.missing_prerequisites.len()
            + self.duplicate_numbers.len()
            + self.prerequisite_cycles.len()
    }
}

/// Runs every check against the catalog and collects the findings.
#[must_use]
pub fn audit(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport::default();

    // Equal numbers sit next to each other in the in-order sequence.
    let mut previous: Option<&CourseId> = None;
    for course in catalog {
        if previous.is_some_and(|p| p == course.number())
            && report.duplicate_numbers.last() != Some(course.number())
        {
            report.duplicate_numbers.push(course.number().clone());
        }
        previous = Some(course.number());
    }

    for course in catalog {
        for prerequisite in course.prerequisites() {
            if catalog.get(prerequisite.as_str()).is_none() {
                report.missing_prerequisites.push(MissingPrerequisite {
                    course: course.number().clone(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }

    report.prerequisite_cycles = cycles(catalog);

    report
}

/// Cycles in the prerequisite graph, over references that resolve.
fn cycles(catalog: &Catalog) -> Vec<Vec<CourseId>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for course in catalog {
        graph.add_node(course.number().as_str());
    }
    for course in catalog {
        for prerequisite in course.prerequisites() {
            if graph.contains_node(prerequisite.as_str()) {
                graph.add_edge(course.number().as_str(), prerequisite.as_str(), ());
            }
        }
    }

    let mut found = Vec::new();
    for component in tarjan_scc(&graph) {
        if component.len() > 1 {
            let mut numbers: Vec<CourseId> =
                component.iter().copied().map(CourseId::from).collect();
            numbers.sort();
            found.push(numbers);
            continue;
        }

        let Some(&node) = component.first() else {
            continue;
        };

        if graph.contains_edge(node, node) {
            found.push(vec![CourseId::from(node)]);
        }
    }

    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Course;

    fn course(number: &str, prerequisites: &[&str]) -> Course {
        Course::new(
            CourseId::from(number),
            "title".to_string(),
            prerequisites.iter().copied().map(CourseId::from).collect(),
        )
    }

    #[test]
    fn well_formed_catalog_is_clean() {
        let catalog: Catalog = [
            course("CS100", &[]),
            course("CS200", &["CS100"]),
            course("CS300", &["CS200", "CS100"]),
        ]
        .into_iter()
        .collect();

        let report = audit(&catalog);
        assert!(report.is_clean());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn unresolved_prerequisites_are_reported_per_reference() {
        let catalog: Catalog = [course("CS200", &["CS100", "MATH100"]), course("CS100", &[])]
            .into_iter()
            .collect();

        let report = audit(&catalog);
        assert_eq!(
            report.missing_prerequisites,
            [MissingPrerequisite {
                course: CourseId::from("CS200"),
                prerequisite: CourseId::from("MATH100"),
            }]
        );
    }

    #[test]
    fn duplicate_numbers_are_reported_once_each() {
        let catalog: Catalog = [
            course("CS200", &[]),
            course("CS100", &[]),
            course("CS200", &[]),
            course("CS200", &[]),
        ]
        .into_iter()
        .collect();

        let report = audit(&catalog);
        assert_eq!(report.duplicate_numbers, [CourseId::from("CS200")]);
    }

    #[test]
    fn mutual_prerequisites_form_a_cycle() {
        let catalog: Catalog = [
            course("CS100", &["CS200"]),
            course("CS200", &["CS100"]),
            course("CS300", &["CS200"]),
        ]
        .into_iter()
        .collect();

        let report = audit(&catalog);
        assert_eq!(
            report.prerequisite_cycles,
            [vec![CourseId::from("CS100"), CourseId::from("CS200")]]
        );
    }

    #[test]
    fn self_reference_is_a_single_course_cycle() {
        let catalog: Catalog = [course("CS100", &["CS100"])].into_iter().collect();

        let report = audit(&catalog);
        assert_eq!(
            report.prerequisite_cycles,
            [vec![CourseId::from("CS100")]]
        );
    }

    #[test]
    fn unresolved_references_do_not_join_the_cycle_graph() {
        // A reference to an absent course is a missing-prerequisite finding,
        // not a graph node.
        let catalog: Catalog = [course("CS100", &["CS999"])].into_iter().collect();

        let report = audit(&catalog);
        assert!(report.prerequisite_cycles.is_empty());
        assert_eq!(report.missing_prerequisites.len(), 1);
    }
}
