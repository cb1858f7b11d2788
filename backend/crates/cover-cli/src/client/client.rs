use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the cover project store REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional bearer token from an earlier login
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the bearer token, when we have one
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in and keep the returned token for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest { email, password });
        let body = self.execute(req).await?;

        let token = body
            .get("token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ClientError::input("login response carries no token"))?;
        self.token = Some(token.to_string());

        Ok(body)
    }

    /// The account behind the current token
    pub async fn me(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/auth/me");
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List the caller's projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/projects/{}", id));
        self.execute(req).await
    }

    /// Create (no `project_id`) or update a project
    pub async fn save_project(
        &self,
        project_id: Option<&str>,
        project_name: &str,
        canvas_json: &str,
        preview_image: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SaveRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            project_id: Option<&'a str>,
            project_name: &'a str,
            canvas_json: &'a str,
            preview_image: Option<&'a str>,
        }

        let body = SaveRequest {
            project_id,
            project_name,
            canvas_json,
            preview_image,
        };
        let req = self.request(Method::POST, "/api/projects/save").json(&body);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/projects/{}", id));
        self.execute(req).await
    }
}

/// Build an `Api` error from a non-2xx response. Bodies that are not the
/// server's JSON error shape are reported verbatim.
#[track_caller]
fn api_error(status: StatusCode, text: &str) -> ClientError {
    let parsed: Option<Value> = serde_json::from_str(text).ok();
    let error = parsed.as_ref().and_then(|body| body.get("error"));

    let code = error
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| {
            if text.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                text.to_string()
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        code,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
