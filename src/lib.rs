//! In-memory course catalog with ordered lookup.
//!
//! Course records are loaded from delimited text files into a binary search
//! tree keyed on course number, then queried by exact number or enumerated
//! in alphanumeric order.

pub mod domain;
pub use domain::{Catalog, Config, Course, CourseId};

pub mod storage;
pub use storage::{LoadError, LoadReport, MalformedRecord, SkippedLine};
