use crate::client::error_message::extract_error_message;
use crate::client::unauthorized::{
    HookId, UnauthorizedEvent, UnauthorizedHook, UnauthorizedHooks,
};
use crate::models::{
    AuthResponse, Credentials, DatasetDetail, DatasetList, DatasetSummary, MessageResponse,
    RegistrationInput, TypeDistribution, UploadResponse,
};
use crate::store::TokenStore;
use crate::validators::validate_csv_path;
use crate::{ClientError, ClientResult};

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use eqviz_config::ApiConfig;
use log::{debug, error, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Prefix used in the `Authorization` header
pub const AUTHORIZATION_SCHEME: &str = "Token";

const UPLOAD_FIELD: &str = "file";
const CSV_MIME: &str = "text/csv";
const SESSION_EXPIRED: &str = "Session expired, please log in again";

/// HTTP client for the equipment dashboard API.
///
/// Every request passes through the same pipeline: the stored token (if any)
/// is attached as `Authorization: Token <value>`, and a 401 answer clears the
/// token store and notifies the registered unauthorized hooks before the error
/// is handed back to the caller.
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
    store: Arc<dyn TokenStore>,
    pub(crate) hooks: UnauthorizedHooks,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8000/api")
    /// * `store` - Where the auth token is read from and cleared on 401
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        Self::with_reqwest(base_url, store, ReqwestClient::new())
    }

    /// Create a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig, store: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_reqwest(&config.base_url, store, client))
    }

    fn with_reqwest(base_url: &str, store: Arc<dyn TokenStore>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            store,
            hooks: UnauthorizedHooks::default(),
        }
    }

    /// The token store this client reads from.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Register a listener for 401 responses.
    ///
    /// Hooks run after the token store has been cleared, once per failing
    /// response, in registration order. The returned id removes the hook via
    /// [`remove_unauthorized`](Self::remove_unauthorized).
    pub fn on_unauthorized<F>(&self, hook: F) -> HookId
    where
        F: Fn(&UnauthorizedEvent) + Send + Sync + 'static,
    {
        let hook: UnauthorizedHook = Arc::new(hook);
        self.hooks.register(hook)
    }

    /// Unregister a hook. Returns false if it was already removed.
    pub fn remove_unauthorized(&self, id: HookId) -> bool {
        self.hooks.remove(id)
    }

    /// Build a request with the auth header attached when a token is stored
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, path);
        let mut req = self.client.request(method, &url);

        match self.store.token() {
            Ok(Some(token)) => {
                req = req.header(
                    reqwest::header::AUTHORIZATION,
                    format!("{AUTHORIZATION_SCHEME} {token}"),
                );
            }
            Ok(None) => {}
            Err(e) => warn!("Could not read auth token, sending {path} without it: {e}"),
        }

        req
    }

    /// Send the request and turn non-success statuses into errors
    async fn dispatch(
        &self,
        req: RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<Value>(&body)
            .ok()
            .as_ref()
            .and_then(extract_error_message);

        if status == StatusCode::UNAUTHORIZED {
            let message = message.unwrap_or_else(|| SESSION_EXPIRED.to_string());
            self.handle_unauthorized(path, &message);
            return Err(ClientError::unauthorized(message));
        }

        let message = message.unwrap_or_else(|| fallback.to_string());
        debug!("{path} failed with {status}: {message}");
        Err(ClientError::api_error(status, message))
    }

    fn handle_unauthorized(&self, path: &str, message: &str) {
        warn!("{path} returned 401, clearing stored session");

        if let Err(e) = self.store.clear() {
            error!("Failed to clear session after 401: {e}");
        }

        self.hooks.fire(&UnauthorizedEvent {
            path: path.to_string(),
            message: message.to_string(),
        });
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> ClientResult<T> {
        let response = self.dispatch(req, path, fallback).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn execute_bytes(
        &self,
        req: RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> ClientResult<Bytes> {
        let response = self.dispatch(req, path, fallback).await?;
        Ok(response.bytes().await?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a token and user profile
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        let path = "/auth/login/";
        let req = self.request(Method::POST, path).json(credentials);
        self.execute(req, path, "Login failed").await
    }

    /// Create an account and receive a token for it
    pub async fn register(&self, input: &RegistrationInput) -> ClientResult<AuthResponse> {
        let path = "/auth/register/";
        let req = self.request(Method::POST, path).json(input);
        self.execute(req, path, "Registration failed").await
    }

    /// Invalidate the current token server-side. The response body is ignored.
    pub async fn logout(&self) -> ClientResult<()> {
        let path = "/auth/logout/";
        let req = self.request(Method::POST, path);
        self.dispatch(req, path, "Logout failed").await?;
        Ok(())
    }

    // =========================================================================
    // Dataset Operations
    // =========================================================================

    /// Upload a CSV file. The file is validated locally first; an invalid
    /// file never reaches the network.
    pub async fn upload_dataset(&self, file_path: &Path) -> ClientResult<UploadResponse> {
        let info = validate_csv_path(file_path)?;

        let contents = tokio::fs::read(file_path)
            .await
            .map_err(|e| ClientError::io(file_path.to_path_buf(), e))?;

        let part = Part::bytes(contents)
            .file_name(info.name)
            .mime_str(CSV_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let path = "/upload/";
        let req = self.request(Method::POST, path).multipart(form);
        self.execute(req, path, "Upload failed").await
    }

    /// List upload history, optionally including deactivated datasets
    pub async fn list_datasets(&self, active_only: bool) -> ClientResult<DatasetList> {
        let path = format!("/datasets/list/?active_only={active_only}");
        let req = self.request(Method::GET, &path);
        self.execute(req, &path, "Failed to list datasets").await
    }

    /// Get a dataset with its equipment rows
    pub async fn get_dataset(&self, id: i64) -> ClientResult<DatasetDetail> {
        let path = format!("/datasets/{id}/");
        let req = self.request(Method::GET, &path);
        self.execute(req, &path, "Failed to get dataset").await
    }

    /// Delete a dataset
    pub async fn delete_dataset(&self, id: i64) -> ClientResult<MessageResponse> {
        let path = format!("/datasets/{id}/delete/");
        let req = self.request(Method::DELETE, &path);
        self.execute(req, &path, "Failed to delete dataset").await
    }

    // =========================================================================
    // Summary & Report Operations
    // =========================================================================

    /// Aggregate statistics for a dataset
    pub async fn get_summary(&self, id: i64) -> ClientResult<DatasetSummary> {
        let path = format!("/summary/{id}/");
        let req = self.request(Method::GET, &path);
        self.execute(req, &path, "Failed to get summary").await
    }

    /// Equipment type counts and percentages for a dataset
    pub async fn get_type_distribution(&self, id: i64) -> ClientResult<TypeDistribution> {
        let path = format!("/summary/{id}/types/");
        let req = self.request(Method::GET, &path);
        self.execute(req, &path, "Failed to get type distribution")
            .await
    }

    /// Download the PDF report for a dataset
    pub async fn get_pdf_report(&self, id: i64) -> ClientResult<Bytes> {
        let path = format!("/report/{id}/pdf/");
        let req = self.request(Method::GET, &path);
        self.execute_bytes(req, &path, "Failed to generate PDF").await
    }
}
