use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    pub course: String,
    pub due_date: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub completion: u8,
    pub attendance: u8,
    pub credits: u8,
    pub professor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaPoint {
    pub semester: String,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub subject: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub cgpa: f64,
    pub semester_gpa: f64,
    pub attendance: u8,
    pub pending_assignments: Vec<Assignment>,
    pub gpa_history: Vec<GpaPoint>,
    pub attendance_breakdown: Vec<SubjectAttendance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentsResponse {
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    pub fn new(id: u32, title: &str, course: &str, due_date: &str, priority: Priority) -> Self {
        Self {
            id,
            title: title.to_string(),
            course: course.to_string(),
            due_date: due_date.to_string(),
            priority,
        }
    }
}

impl Course {
    pub fn new(
        id: &str,
        name: &str,
        completion: u8,
        attendance: u8,
        credits: u8,
        professor: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            completion,
            attendance,
            credits,
            professor: professor.to_string(),
        }
    }
}
