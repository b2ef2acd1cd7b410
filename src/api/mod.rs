use reqwest::{
    Client,
    StatusCode,
};

use crate::core::{
    ApiError,
    Course,
    NewCourse,
    Student,
};

/// Fallback backend address when no settings file exists yet.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

fn status_error(status: StatusCode, endpoint: &str) -> ApiError {
    ApiError::UnexpectedStatus { status: status.as_u16(), endpoint: endpoint.to_string() }
}

/// `GET {base}/students/with-courses`: the roster, one record per student
/// with the course object inlined (or null). Server order is preserved.
pub async fn fetch_roster(client: &Client, base_url: &str) -> Result<Vec<Student>, ApiError> {
    let url = format!("{}/students/with-courses", base_url);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(status_error(response.status(), "/students/with-courses"));
    }

    Ok(response.json::<Vec<Student>>().await?)
}

/// `POST {base}/courses`. The backend answers 201 with the created record;
/// anything else, other 2xx codes included, is a failure.
pub async fn create_course(
    client: &Client,
    base_url: &str,
    course: &NewCourse,
) -> Result<(), ApiError> {
    let url = format!("{}/courses", base_url);
    let response = client.post(&url).json(course).send().await?;

    if response.status() != StatusCode::CREATED {
        return Err(status_error(response.status(), "/courses"));
    }

    Ok(())
}

/// `GET {base}/courses`: the course catalog.
pub async fn list_courses(client: &Client, base_url: &str) -> Result<Vec<Course>, ApiError> {
    let url = format!("{}/courses", base_url);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(status_error(response.status(), "/courses"));
    }

    Ok(response.json::<Vec<Course>>().await?)
}

/// Reachability probe for the status indicator. Any HTTP response counts as
/// reachable; only a transport failure counts as down.
pub async fn probe(client: &Client, base_url: &str) -> bool {
    let url = format!("{}/courses", base_url);
    client.get(&url).send().await.is_ok()
}

#[cfg(test)]
pub(crate) mod test_server {
    use std::{
        io::{
            Read,
            Write,
        },
        net::TcpListener,
        thread,
        time::Duration,
    };

    /// Serves one canned HTTP response on loopback and exits. Returns the
    /// base URL to point the client at.
    pub fn serve_once(status: u16, reason: &str, body: &str) -> String {
        serve_once_delayed(status, reason, body, Duration::ZERO)
    }

    pub fn serve_once_delayed(
        status: u16,
        reason: &str,
        body: &str,
        delay: Duration,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        format!("http://{}", addr)
    }

    /// Address with nothing listening, for transport-failure tests.
    pub fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        drop(listener);
        format!("http://{}", addr)
    }

    // Drain headers plus any Content-Length body so the client finishes
    // writing before we respond.
    fn read_request(stream: &mut std::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            match stream.read(&mut chunk) {
                Ok(0) => return,
                Ok(n) => {
                    buf.extend_from_slice(&chunk[..n]);
                    if let Some(pos) = find_header_end(&buf) {
                        break pos;
                    }
                }
                Err(_) => return,
            }
        };

        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let mut body_read = buf.len() - (header_end + 4);
        while body_read < content_length {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => body_read += n,
            }
        }
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        test_server::{
            serve_once,
            unreachable_url,
        },
        *,
    };

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(future)
    }

    const ROSTER_BODY: &str = r#"[
        {"studentId": 1, "studentName": "Ada Lovelace", "email": "ada@example.edu",
         "phone": "555-0101", "role": "STUDENT",
         "course": {"courseId": 7, "courseName": "Algorithms",
                    "courseCode": "CS201", "courseDuration": 12}},
        {"studentId": 2, "studentName": "Grace Hopper", "email": "grace@example.edu",
         "phone": "555-0102", "role": "STUDENT", "course": null}
    ]"#;

    #[test]
    fn fetch_roster_parses_success_response() {
        let base = serve_once(200, "OK", ROSTER_BODY);
        let students = block_on(fetch_roster(&Client::new(), &base)).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].student_name, "Ada Lovelace");
        assert_eq!(students[0].course_label(), "Algorithms");
        assert_eq!(students[1].course_label(), crate::core::NO_COURSE);
    }

    #[test]
    fn fetch_roster_rejects_error_status() {
        let base = serve_once(500, "Internal Server Error", "");
        let err = block_on(fetch_roster(&Client::new(), &base)).unwrap_err();

        match err {
            ApiError::UnexpectedStatus { status, .. } => assert_eq!(status, 500),
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn fetch_roster_surfaces_transport_failure() {
        let base = unreachable_url();
        let err = block_on(fetch_roster(&Client::new(), &base)).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn create_course_succeeds_only_on_201() {
        let course = NewCourse::from_inputs("Algorithms", "CS201", "12");

        let base = serve_once(201, "Created", "{}");
        assert!(block_on(create_course(&Client::new(), &base, &course)).is_ok());

        // A plain 200 is not a creation acknowledgement.
        let base = serve_once(200, "OK", "{}");
        let err = block_on(create_course(&Client::new(), &base, &course)).unwrap_err();
        match err {
            ApiError::UnexpectedStatus { status, .. } => assert_eq!(status, 200),
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }

        let base = serve_once(400, "Bad Request", "");
        assert!(block_on(create_course(&Client::new(), &base, &course)).is_err());
    }

    #[test]
    fn list_courses_parses_catalog() {
        let body = r#"[
            {"courseId": 7, "courseName": "Algorithms", "courseCode": "CS201",
             "courseDuration": 12},
            {"courseId": 8, "courseName": "Databases", "courseCode": "CS305",
             "courseDuration": null}
        ]"#;
        let base = serve_once(200, "OK", body);
        let courses = block_on(list_courses(&Client::new(), &base)).unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_code.as_deref(), Some("CS201"));
        assert_eq!(courses[1].course_duration, None);
    }

    #[test]
    fn probe_counts_any_response_as_reachable() {
        let base = serve_once(503, "Service Unavailable", "");
        assert!(block_on(probe(&Client::new(), &base)));

        let base = unreachable_url();
        assert!(!block_on(probe(&Client::new(), &base)));
    }
}
