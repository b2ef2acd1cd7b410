use serde::{
    Deserialize,
    Serialize,
};

/// Rendered in the course column when a student has no assignment.
pub const NO_COURSE: &str = "No Course";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub course_id: Option<u64>,
    pub course_name: String,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub course_duration: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: u64,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub course: Option<Course>,
}

impl Student {
    pub fn course_label(&self) -> &str {
        self.course.as_ref().map(|c| c.course_name.as_str()).unwrap_or(NO_COURSE)
    }
}

/// Payload for `POST /courses`. Kept separate from [`Course`] so the body
/// carries exactly the three fields the backend expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
    pub course_duration: Option<i64>,
}

impl NewCourse {
    pub fn from_inputs(name: &str, code: &str, duration: &str) -> Self {
        Self {
            course_name: name.to_string(),
            course_code: code.to_string(),
            course_duration: parse_duration(duration),
        }
    }
}

/// Leading-integer parse of the duration field. A missing integer prefix
/// yields `None`, which serializes as JSON `null` and is sent as-is rather
/// than rejected locally.
pub fn parse_duration(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() {
        return None;
    }

    prefix.parse::<i64>().ok().map(|n| sign * n)
}

/// A fetched value tagged with the in-flight generation that produced it.
/// Each new load bumps the generation, so a response from a superseded
/// request can be recognized and discarded instead of overwriting newer data.
#[derive(Debug, Default)]
pub struct Tracked<T> {
    value: T,
    loaded: bool,
    generation: u64,
}

pub type Roster = Tracked<Vec<Student>>;
pub type Catalog = Tracked<Vec<Course>>;

impl<T> Tracked<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record that a load with this generation is now the one we care about.
    pub fn track(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Apply a completed load. Returns false (leaving the value untouched)
    /// when the result belongs to a superseded request.
    pub fn accept(&mut self, generation: u64, value: T) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value = value;
        self.loaded = true;
        true
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u64, course: Option<Course>) -> Student {
        Student {
            student_id: id,
            student_name: format!("Student {}", id),
            email: format!("s{}@example.edu", id),
            phone: "555-0100".to_string(),
            role: None,
            course,
        }
    }

    #[test]
    fn new_course_serializes_exact_payload() {
        let course = NewCourse::from_inputs("Algorithms", "CS201", "12");
        let body = serde_json::to_string(&course).unwrap();
        assert_eq!(body, r#"{"courseName":"Algorithms","courseCode":"CS201","courseDuration":12}"#);
    }

    #[test]
    fn non_numeric_duration_serializes_as_null() {
        let course = NewCourse::from_inputs("Algorithms", "CS201", "abc");
        let body = serde_json::to_string(&course).unwrap();
        assert_eq!(
            body,
            r#"{"courseName":"Algorithms","courseCode":"CS201","courseDuration":null}"#
        );
    }

    #[test]
    fn duration_parsing_takes_leading_integer() {
        assert_eq!(parse_duration("12"), Some(12));
        assert_eq!(parse_duration(" 12 "), Some(12));
        assert_eq!(parse_duration("12 weeks"), Some(12));
        assert_eq!(parse_duration("-4"), Some(-4));
        assert_eq!(parse_duration("+8"), Some(8));
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn roster_record_parses_with_and_without_course() {
        let json = r#"[
            {"studentId": 1, "studentName": "Ada", "email": "ada@example.edu",
             "phone": "555-0101", "role": "STUDENT",
             "course": {"courseId": 7, "courseName": "Algorithms",
                        "courseCode": "CS201", "courseDuration": 12}},
            {"studentId": 2, "studentName": "Brin", "email": "brin@example.edu",
             "phone": "555-0102", "role": null, "course": null}
        ]"#;

        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].course_label(), "Algorithms");
        assert_eq!(students[0].course.as_ref().unwrap().course_id, Some(7));
        assert_eq!(students[1].course_label(), NO_COURSE);
    }

    #[test]
    fn tracked_accepts_only_current_generation() {
        let mut roster = Roster::default();

        roster.track(1);
        roster.track(2);

        // The generation-1 response arrives after generation 2 was issued.
        assert!(!roster.accept(1, vec![student(1, None)]));
        assert!(!roster.is_loaded());
        assert!(roster.get().is_empty());

        assert!(roster.accept(2, vec![student(2, None), student(3, None)]));
        assert!(roster.is_loaded());
        assert_eq!(roster.get().len(), 2);

        // A straggler from generation 1 must not clobber the applied data.
        assert!(!roster.accept(1, Vec::new()));
        assert_eq!(roster.get().len(), 2);
    }
}
