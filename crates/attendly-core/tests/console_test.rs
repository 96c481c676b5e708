#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use attendly_api::ApiClient;
use attendly_core::{Console, Role, ShellState};

async fn console_for(server: &MockServer) -> Console {
    let api = ApiClient::with_client(
        reqwest::Client::new(),
        server.uri().parse().unwrap(),
    );
    Console::new(api)
}

#[tokio::test]
async fn boot_with_live_session_enters_authenticated_shell() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "superuser",
            "role": "superadmin"
        })))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    assert_eq!(console.shell_state(), ShellState::Booting);
    assert_eq!(console.boot().await, ShellState::Authenticated);

    let session = console.session();
    assert!(session.authenticated);
    assert_eq!(session.role, Some(Role::Superuser));
    assert!(session.error.is_none());
}

#[tokio::test]
async fn boot_probe_rejection_is_silent_and_one_shot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getme"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    assert_eq!(console.boot().await, ShellState::Unauthenticated);
    assert!(console.session().error.is_none());

    // Second call must not probe again.
    assert_eq!(console.boot().await, ShellState::Unauthenticated);
}

#[tokio::test]
async fn boot_surfaces_unexpected_probe_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getme"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "database offline"})),
        )
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    assert_eq!(console.boot().await, ShellState::Unauthenticated);
    assert_eq!(console.session().error.as_deref(), Some("database offline"));
}

#[tokio::test]
async fn failed_login_keeps_shell_unauthenticated_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    let result = console
        .login_admin("root", &SecretString::from("wrong"))
        .await;
    assert!(result.is_err());
    assert_eq!(console.shell_state(), ShellState::Unauthenticated);

    let session = console.session();
    assert!(!session.authenticated);
    assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn employee_login_without_empid_payload_still_derives_employee() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/employee/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Asha"
        })))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    let session = console
        .login_employee("E042", &SecretString::from("hunter22"))
        .await
        .unwrap();
    assert_eq!(session.role, Some(Role::Employee));
    assert_eq!(
        session.user.and_then(|u| u.empid).as_deref(),
        Some("E042")
    );
}

#[tokio::test]
async fn login_then_logout_round_trip_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "ops",
            "role": "admin"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    let session = console
        .login_admin("ops", &SecretString::from("hunter22"))
        .await
        .unwrap();
    assert_eq!(session.role, Some(Role::Admin));
    assert_eq!(console.shell_state(), ShellState::Authenticated);

    console.logout().await.unwrap();
    assert_eq!(console.shell_state(), ShellState::Unauthenticated);
    assert!(!console.session().authenticated);
    assert!(console.session().user.is_none());
}

#[tokio::test]
async fn logout_failure_still_clears_session_but_reports() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "empid": "E042",
            "username": "E042"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "session table locked"})),
        )
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    console
        .login_admin("E042", &SecretString::from("hunter22"))
        .await
        .unwrap();

    let result = console.logout().await;
    assert!(result.is_err());
    // Client-side session is gone either way.
    assert!(!console.session().authenticated);
    assert_eq!(
        console.session().error.as_deref(),
        Some("session table locked")
    );
    assert_eq!(console.shell_state(), ShellState::Unauthenticated);
}

#[tokio::test]
async fn add_admin_appends_response_record_to_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "root"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "username": "auditor"}
        ])))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    console.fetch_admins().await.unwrap();
    let added = console
        .add_admin("auditor", &SecretString::from("s3cret-pw"))
        .await
        .unwrap();
    assert_eq!(added.id, 7);

    let state = console.stores.admins.current();
    let names: Vec<_> = state.data.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, ["root", "auditor"]);
}

#[tokio::test]
async fn delete_admin_filters_store_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "username": "a"},
            {"id": 5, "username": "b"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    console.fetch_admins().await.unwrap();
    console.delete_admin(5).await.unwrap();

    let ids: Vec<_> = console
        .stores
        .admins
        .current()
        .data
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, [3]);
}

#[tokio::test]
async fn create_employee_stashes_one_time_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/employee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "empid": "E100",
            "name": "Mira Patel",
            "email": "mira@example.com",
            "password": "one-time-9f2e"
        })))
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    console
        .create_employee("E100", "Mira Patel", "mira@example.com", None)
        .await
        .unwrap();

    let created = console.stores.manage_employee.take_created().unwrap();
    assert_eq!(created.password.as_deref(), Some("one-time-9f2e"));
    // Shown once only.
    assert!(console.stores.manage_employee.take_created().is_none());
}

#[tokio::test]
async fn model_failure_lands_in_panel_log() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/model/start"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "model already running"})),
        )
        .mount(&server)
        .await;

    let console = console_for(&server).await;
    assert!(console.start_model().await.is_err());

    let panel = console.stores.model.current();
    assert_eq!(panel.error.as_deref(), Some("model already running"));
    assert!(panel
        .logs
        .iter()
        .any(|line| line.contains("model already running")));
}
