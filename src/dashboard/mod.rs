//! Fixed dashboard data served to the frontend.

mod types;

pub use types::*;

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment::new(1, "Binary Search Tree Implementation", "Data Structures", "2026-01-25", Priority::High),
        Assignment::new(2, "SQL Query Optimization", "DBMS", "2026-01-28", Priority::Medium),
        Assignment::new(3, "TCP/IP Protocol Analysis", "Computer Networks", "2026-01-30", Priority::Low),
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course::new("CS301", "Data Structures & Algorithms", 65, 88, 4, "Dr. Smith"),
        Course::new("CS302", "Database Management Systems", 72, 92, 4, "Dr. Johnson"),
        Course::new("CS303", "Computer Networks", 58, 78, 3, "Dr. Williams"),
        Course::new("CS304", "Operating Systems", 80, 85, 4, "Dr. Brown"),
        Course::new("CS305", "Web Development", 90, 90, 3, "Dr. Davis"),
    ]
}

pub fn stats() -> Stats {
    Stats {
        cgpa: 8.5,
        semester_gpa: 8.7,
        attendance: 85,
        pending_assignments: assignments(),
        gpa_history: [
            ("Sem 1", 8.2),
            ("Sem 2", 8.4),
            ("Sem 3", 8.3),
            ("Sem 4", 8.6),
            ("Sem 5", 8.7),
        ]
        .into_iter()
        .map(|(semester, gpa)| GpaPoint {
            semester: semester.to_string(),
            gpa,
        })
        .collect(),
        attendance_breakdown: [
            ("Data Structures", 88),
            ("DBMS", 92),
            ("Computer Networks", 78),
            ("Operating Systems", 85),
            ("Web Development", 90),
        ]
        .into_iter()
        .map(|(subject, percentage)| SubjectAttendance {
            subject: subject.to_string(),
            percentage,
        })
        .collect(),
    }
}
