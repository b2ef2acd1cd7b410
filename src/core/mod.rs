pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::ApiError;
pub use models::{Catalog, Course, NewCourse, Roster, Student, NO_COURSE};
