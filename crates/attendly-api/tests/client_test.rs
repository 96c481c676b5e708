#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use attendly_api::{ApiClient, AttendanceStatus, Error, ModelState, PhotoUpload};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn secret(s: &str) -> secrecy::SecretString {
    s.to_string().into()
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn admin_login_posts_form_and_returns_user() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=pw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
        .mount(&server)
        .await;

    let user = client.login_admin("alice", &secret("pw")).await.unwrap();
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert!(user.empid.is_none());
}

#[tokio::test]
async fn employee_login_posts_empid_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/employee/login"))
        .and(body_string_contains("empid=E1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"empid": "E1"})))
        .mount(&server)
        .await;

    let user = client.login_employee("E1", &secret("pw")).await.unwrap();
    assert_eq!(user.empid.as_deref(), Some("E1"));
}

#[tokio::test]
async fn login_failure_surfaces_backend_detail() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = client.login_admin("alice", &secret("bad")).await.unwrap_err();
    assert_eq!(err.detail(), "Invalid credentials");
    assert!(!err.is_unauthenticated());
}

#[tokio::test]
async fn session_probe_401_is_expected_unauthenticated() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/getme"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Authentication failed"})),
        )
        .mount(&server)
        .await;

    let err = client.get_me().await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn session_probe_server_error_is_not_suppressed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/getme"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.get_me().await.unwrap_err();
    assert!(!err.is_unauthenticated());
    assert_eq!(err.detail(), "HTTP 500 Internal Server Error");
}

#[tokio::test]
async fn logout_posts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Logout successful"})),
        )
        .mount(&server)
        .await;

    client.logout().await.unwrap();
}

// ── Employee tests ──────────────────────────────────────────────────

#[tokio::test]
async fn list_employees_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/employee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "employees": [
                {"empid": "E1", "name": "Ada", "email": "ada@example.com"},
                {"empid": "E2", "name": "Grace", "email": "grace@example.com",
                 "photoUrl": "/static/E2/face.jpg"},
            ]
        })))
        .mount(&server)
        .await;

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].empid, "E1");
    assert_eq!(employees[1].photo_url.as_deref(), Some("/static/E2/face.jpg"));
}

#[tokio::test]
async fn create_employee_returns_one_time_password() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/employee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "empid": "E1", "name": "A", "email": "a@b.com", "password": "s3cret"
        })))
        .mount(&server)
        .await;

    let created = client
        .create_employee(
            "E1",
            "A",
            "a@b.com",
            Some(PhotoUpload {
                file_name: "face.jpg".into(),
                bytes: vec![0xFF, 0xD8],
            }),
        )
        .await
        .unwrap();

    assert_eq!(created.empid, "E1");
    assert_eq!(created.password.as_deref(), Some("s3cret"));
}

#[tokio::test]
async fn update_employee_unwraps_emp_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/employee/E1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "emp": {"empid": "E9", "name": "Ada", "email": "ada@example.com"}
        })))
        .mount(&server)
        .await;

    let updated = client
        .update_employee("E1", "E9", "Ada", "ada@example.com", None)
        .await
        .unwrap();
    assert_eq!(updated.empid, "E9");
}

// ── Admin tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn add_admin_returns_first_element_of_array() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 5, "username": "newadmin"}])),
        )
        .mount(&server)
        .await;

    let admin = client.add_admin("newadmin", &secret("pw")).await.unwrap();
    assert_eq!(admin.id, 5);
    assert_eq!(admin.username, "newadmin");
}

#[tokio::test]
async fn delete_admin_hits_id_path() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Admin deleted"})),
        )
        .mount(&server)
        .await;

    client.delete_admin(5).await.unwrap();
}

// ── Photo tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn list_photos_unwraps_urls() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/employee/photos/E1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urls": ["/static/E1/a.jpg", "/static/E1/b.jpg"]
        })))
        .mount(&server)
        .await;

    let urls = client.list_photos("E1").await.unwrap();
    assert_eq!(urls.len(), 2);
}

#[tokio::test]
async fn delete_photo_sends_filename_form_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/employee/deletephoto/E1"))
        .and(body_string_contains("a.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Photo deleted successfully"})),
        )
        .mount(&server)
        .await;

    client.delete_photo("E1", "a.jpg").await.unwrap();
}

// ── Attendance tests ────────────────────────────────────────────────

#[tokio::test]
async fn attendance_passes_date_range_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/employee/attendance/E1"))
        .and(query_param("start_date", "2026-08-03"))
        .and(query_param("end_date", "2026-08-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2026-08-03", "firstEntry": "09:02", "lastExit": "17:31",
             "totalInTime": "7h 45m", "totalOutTime": "0h 44m", "status": "Present"},
            {"date": "2026-08-04", "firstEntry": "-", "lastExit": "-",
             "totalInTime": "-", "totalOutTime": "-", "status": "Absent"},
        ])))
        .mount(&server)
        .await;

    let start = chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let days = client.attendance("E1", start, end).await.unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].status, AttendanceStatus::Present);
    assert_eq!(days[0].total_in_time, "7h 45m");
    assert_eq!(days[1].status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn daily_summary_decodes_counts_and_lists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/employee/summary/2026-08-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": "2026-08-28",
            "totalEmployees": 3,
            "totalPresent": 2,
            "totalAbsent": 1,
            "presentEmployees": [
                {"empid": "E1", "name": "Ada"},
                {"empid": "E2", "name": "Grace"},
            ],
            "absentEmployees": [{"empid": "E3", "name": "Alan"}]
        })))
        .mount(&server)
        .await;

    let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let summary = client.daily_summary(date).await.unwrap();

    assert_eq!(summary.total_employees, 3);
    assert_eq!(summary.present_employees.len(), 2);
    assert_eq!(summary.absent_employees[0].empid, "E3");
}

// ── Configuration tests ─────────────────────────────────────────────

#[tokio::test]
async fn configuration_round_trip() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/configure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "camera_enter": "rtsp://cam1/stream",
            "camera_exit": "rtsp://cam2/stream"
        })))
        .mount(&server)
        .await;

    let config = client.get_configuration().await.unwrap();
    assert_eq!(config.camera_enter, "rtsp://cam1/stream");

    Mock::given(method("POST"))
        .and(path("/configure"))
        .and(body_string_contains("camera_exit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
        .mount(&server)
        .await;

    client.save_configuration(&config).await.unwrap();
}

#[tokio::test]
async fn stream_url_encodes_rtsp_source() {
    let (server, client) = setup().await;
    drop(server);

    let url = client.stream_url("rtsp://cam1/stream?channel=1").unwrap();
    assert_eq!(url.path(), "/stream");
    assert!(url.query().unwrap().contains("rtsp"));
}

// ── Model tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn model_status_decodes_state() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/model/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .mount(&server)
        .await;

    let state = client.model_status().await.unwrap();
    assert_eq!(state, ModelState::Running);
}

#[tokio::test]
async fn generate_embeddings_returns_log_lines() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/model/generate-embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": ["E1: 4 embeddings", "E2: 2 embeddings"]
        })))
        .mount(&server)
        .await;

    let logs = client.generate_embeddings().await.unwrap();
    assert_eq!(logs.len(), 2);
}

#[tokio::test]
async fn model_error_uses_generic_fallback_without_detail() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/model/start"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client.start_model().await.unwrap_err();
    assert_eq!(err.detail(), "HTTP 502 Bad Gateway");
}
