//! Wires config, token store, client and session together and runs one command.

use crate::cli::Cli;
use crate::commands::Commands;
use crate::dataset_commands::DatasetCommands;
use crate::error::{CliError, Result as CliResult};
use crate::logger;

use eqviz_client::guard::redirect_on_unauthorized;
use eqviz_client::models::{Credentials, RegistrationInput, UserProfile};
use eqviz_client::{
    ApiClient, AuthSession, FileTokenStore, GuardDecision, Route, TokenStore, resolve,
};
use eqviz_config::{ApiConfig, Config};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// Load config, start the session and run the parsed command.
///
/// Returns the rendered JSON to print on stdout.
pub async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let api = api_config(&config, cli.server.as_deref())?;
    let session = connect(&api, config.session_dir()?)?;

    let value = execute(cli.command, &session).await?;
    render(&value, cli.pretty)
}

/// The `[api]` section with the `--server` flag applied on top.
pub fn api_config(config: &Config, server: Option<&str>) -> CliResult<ApiConfig> {
    let mut api = config.api.clone();
    if let Some(url) = server {
        api.base_url = url.to_string();
        api.validate()?;
    }
    Ok(api)
}

/// Build a session backed by the file store in `session_dir`.
///
/// A 401 on any call prints sign-in guidance to stderr.
pub fn connect(api: &ApiConfig, session_dir: PathBuf) -> CliResult<AuthSession> {
    debug!("Session directory: {}", session_dir.display());
    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(session_dir));
    let client = Arc::new(ApiClient::from_config(api, store)?);

    let session = AuthSession::start(client);
    redirect_on_unauthorized(session.client(), Arc::new(session_expired_notice));
    Ok(session)
}

fn session_expired_notice(route: Route) {
    eprintln!("Session expired, please log in again.");
    eprintln!();
    eprintln!("  eqviz login --username <name>");
    debug!("Redirected to {route}");
}

/// Run one command against an already started session.
pub async fn execute(command: Commands, session: &AuthSession) -> CliResult<Value> {
    if command.requires_auth() {
        require_user(session)?;
    }

    let client = session.client();

    match command {
        Commands::Login { username, password } => {
            let password = password_or_prompt(password)?;
            let user = session
                .login(&Credentials::new(username, password))
                .await?;
            to_json(&user)
        }
        Commands::Register {
            username,
            email,
            password,
            first_name,
            last_name,
        } => {
            let input = RegistrationInput {
                username,
                email,
                password: password_or_prompt(password)?,
                first_name,
                last_name,
            };
            let user = session.register(&input).await?;
            to_json(&user)
        }
        Commands::Logout => {
            session.logout().await?;
            Ok(json!({ "message": "Logged out" }))
        }
        Commands::Whoami => to_json(&require_user(session)?),
        Commands::Upload { path } => to_json(&client.upload_dataset(&path).await?),
        Commands::Datasets { action } => match action {
            DatasetCommands::List { all } => to_json(&client.list_datasets(!all).await?),
            DatasetCommands::Get { id } => to_json(&client.get_dataset(id).await?),
            DatasetCommands::Delete { id } => to_json(&client.delete_dataset(id).await?),
        },
        Commands::Summary { id } => to_json(&client.get_summary(id).await?),
        Commands::Types { id } => to_json(&client.get_type_distribution(id).await?),
        Commands::Report { id, output } => {
            let bytes = client.get_pdf_report(id).await?;
            let path = output.unwrap_or_else(|| default_report_path(id));
            write_report(&path, &bytes).await?;
            Ok(json!({
                "dataset_id": id,
                "path": path.display().to_string(),
                "bytes": bytes.len(),
            }))
        }
    }
}

/// The signed-in user, or an error naming where the guard sent us.
pub fn require_user(session: &AuthSession) -> CliResult<UserProfile> {
    let state = session.state();
    match resolve(Route::Dashboard, &state) {
        Some(GuardDecision::Allow(user)) => Ok(user.clone()),
        Some(GuardDecision::Redirect(route)) => Err(CliError::not_signed_in(route)),
        Some(GuardDecision::Pending) | None => Err(CliError::not_signed_in(Route::Login)),
    }
}

pub fn default_report_path(id: i64) -> PathBuf {
    PathBuf::from(format!("equipment_report_{id}.pdf"))
}

async fn write_report(path: &Path, bytes: &[u8]) -> CliResult<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| CliError::io(path.to_path_buf(), e))
}

fn password_or_prompt(password: Option<String>) -> CliResult<String> {
    match password {
        Some(password) => Ok(password),
        None => read_password(&mut std::io::stdin().lock()),
    }
}

/// Read a password from the first line of `reader`.
pub fn read_password(reader: &mut impl BufRead) -> CliResult<String> {
    eprint!("Password: ");
    let _ = std::io::stderr().flush();

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| CliError::input(format!("Failed to read password: {e}")))?;

    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(CliError::input("Password is required"));
    }
    Ok(password.to_string())
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Serialize command output, pretty-printed on request.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
