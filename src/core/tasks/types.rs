use crate::core::{
    Course,
    Student,
};

/// Completed background work, drained from the channel once per frame.
/// Fetch variants carry the generation of the request that produced them so
/// stale responses can be dropped instead of applied.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Roster { generation: u64, result: Result<Vec<Student>, String> },
    Catalog { generation: u64, result: Result<Vec<Course>, String> },
    CourseCreated(Result<(), String>),
    BackendStatus(bool),
}
