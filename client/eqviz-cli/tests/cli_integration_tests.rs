//! Command execution against a wiremock backend with an on-disk session

use eqviz_cli::commands::Commands;
use eqviz_cli::dataset_commands::DatasetCommands;
use eqviz_cli::{CliError, connect, execute};

use eqviz_client::{Route, SessionState};
use eqviz_config::ApiConfig;

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn api(uri: &str) -> ApiConfig {
    ApiConfig {
        base_url: uri.to_string(),
        timeout_secs: Some(5),
    }
}

fn login_command() -> Commands {
    Commands::Login {
        username: "bob".into(),
        password: Some("secret123".into()),
    }
}

async fn mount_login_ok(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc",
            "user": { "id": 1, "username": "bob" }
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_login_then_whoami_in_new_process() {
    let mock_server = MockServer::start().await;
    mount_login_ok(&mock_server).await;
    let dir = TempDir::new().unwrap();

    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    let user = execute(login_command(), &session).await.unwrap();
    assert_eq!(user, json!({ "id": 1, "username": "bob" }));

    // A fresh session reads the same directory, like the next CLI invocation.
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    let whoami = execute(Commands::Whoami, &session).await.unwrap();
    assert_eq!(whoami["username"], "bob");
}

#[tokio::test]
async fn test_protected_command_without_session_is_redirected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();

    let err = execute(Commands::Summary { id: 1 }, &session)
        .await
        .unwrap_err();

    match err {
        CliError::NotSignedIn { route, .. } => assert_eq!(route, Route::Login),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_datasets_list_all_disables_active_filter() {
    let mock_server = MockServer::start().await;
    mount_login_ok(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/datasets/list/"))
        .and(query_param("active_only", "false"))
        .and(header("Authorization", "Token abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [
                { "id": 1, "filename": "a.csv", "upload_date": "2024-05-01T10:00:00Z",
                  "row_count": 10, "file_size": 600, "is_active": false }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    execute(login_command(), &session).await.unwrap();

    let value = execute(
        Commands::Datasets {
            action: DatasetCommands::List { all: true },
        },
        &session,
    )
    .await
    .unwrap();

    assert_eq!(value["count"], 1);
    assert_eq!(value["results"][0]["is_active"], false);
}

#[tokio::test]
async fn test_report_written_to_output_path() {
    let mock_server = MockServer::start().await;
    mount_login_ok(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/report/4/pdf/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(b"%PDF-1.4 fake".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("plant.pdf");
    let session = connect(&api(&mock_server.uri()), dir.path().join("session")).unwrap();
    execute(login_command(), &session).await.unwrap();

    let value = execute(
        Commands::Report {
            id: 4,
            output: Some(output.clone()),
        },
        &session,
    )
    .await
    .unwrap();

    assert_eq!(value["bytes"], 13);
    assert_eq!(std::fs::read(&output).unwrap(), b"%PDF-1.4 fake");
}

#[tokio::test]
async fn test_expired_token_clears_session_on_disk() {
    let mock_server = MockServer::start().await;
    mount_login_ok(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/summary/9/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid token."
        })))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    execute(login_command(), &session).await.unwrap();

    let err = execute(Commands::Summary { id: 9 }, &session)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid token.");
    assert_eq!(session.state(), SessionState::Unauthenticated);

    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_succeeds_when_server_is_down() {
    let mock_server = MockServer::start().await;
    mount_login_ok(&mock_server).await;

    let dir = TempDir::new().unwrap();
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();
    execute(login_command(), &session).await.unwrap();
    drop(mock_server);

    let value = execute(Commands::Logout, &session).await.unwrap();

    assert_eq!(value["message"], "Logged out");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_register_short_password_rejected_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = connect(&api(&mock_server.uri()), dir.path().to_path_buf()).unwrap();

    let err = execute(
        Commands::Register {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: Some("short".into()),
            first_name: String::new(),
            last_name: String::new(),
        },
        &session,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Password must be at least 8 characters");
}
