pub use crate::dashboard::{AssignmentsResponse, CoursesResponse, Stats};
pub use crate::notes::{NoteRequest, NoteResponse};
