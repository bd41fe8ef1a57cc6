use std::{convert::Infallible, fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

/// A course number, such as `CS200` or `MATH201`.
///
/// This is the catalog's sort key. Numbers are compared byte-wise, so the
/// ordering is plain lexicographic: `CS100` sorts before `CS99` because `'1'`
/// precedes `'9'`. That is the ordering the data files are written for.
///
/// No format validation is applied: whatever string the data file carries is
/// preserved verbatim, including the empty string. Catalog health checks are
/// the place where questionable numbers surface (see
/// [`crate::domain::audit`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a course number from a string, verbatim.
    #[must_use]
    pub const fn new(number: String) -> Self {
        Self(number)
    }

    /// Returns the course number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A single course record.
///
/// Courses are immutable once constructed: the catalog only ever inserts new
/// records, it never rewrites a stored one. Prerequisites are other course
/// numbers, kept in the order the data file listed them. Nothing here checks
/// that those numbers exist in the catalog; that is a property of the whole
/// catalog, reported by [`crate::domain::audit::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    number: CourseId,
    title: String,
    prerequisites: Vec<CourseId>,
}

impl Course {
    /// Construct a new course record.
    #[must_use]
    pub const fn new(number: CourseId, title: String, prerequisites: Vec<CourseId>) -> Self {
        Self {
            number,
            title,
            prerequisites,
        }
    }

    /// The course number. This is the catalog sort key.
    #[must_use]
    pub const fn number(&self) -> &CourseId {
        &self.number
    }

    /// The human-readable course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The prerequisite course numbers, in data-file order.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }
}
