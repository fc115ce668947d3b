use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the mn-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Non-JSON error bodies (unknown routes, wrong methods) fall back to the status code
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .or(status.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(body)
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    pub async fn get_session(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/session");
        self.execute(req).await
    }

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self
            .request(Method::POST, "/api/v1/session/login")
            .json(&body);
        self.execute(req).await
    }

    pub async fn logout(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/session/logout");
        self.execute(req).await
    }

    // =========================================================================
    // Theme Operations
    // =========================================================================

    /// Active theme, as `{"theme": "dark" | "light"}`
    pub async fn get_theme(&self) -> CliClientResult<Value> {
        let session = self.get_session().await?;
        Ok(json!({ "theme": session["session"]["theme"] }))
    }

    pub async fn set_theme(&self, dark: bool) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, "/api/v1/session/theme")
            .json(&json!({ "dark": dark }));
        self.execute(req).await
    }

    pub async fn toggle_theme(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/session/theme/toggle");
        self.execute(req).await
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    pub async fn list_nodes(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/nodes");
        self.execute(req).await
    }

    pub async fn get_node(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/nodes/{}", id));
        self.execute(req).await
    }

    pub async fn create_node(
        &self,
        name: &str,
        x: i32,
        y: i32,
        node_type: Option<&str>,
        floor: Option<i32>,
        accessible: Option<bool>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct Coordinates {
            x: i32,
            y: i32,
        }

        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            node_type: Option<&'a str>,
            coordinates: Coordinates,
            #[serde(skip_serializing_if = "Option::is_none")]
            floor: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            accessible: Option<bool>,
        }

        let body = CreateRequest {
            name,
            node_type,
            coordinates: Coordinates { x, y },
            floor,
            accessible,
        };
        let req = self.request(Method::POST, "/api/v1/nodes").json(&body);
        self.execute(req).await
    }

    /// Delete a node; the response lists the edges removed with it
    pub async fn delete_node(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/nodes/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    pub async fn list_edges(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/edges");
        self.execute(req).await
    }

    pub async fn create_edge(
        &self,
        start: &str,
        end: &str,
        distance: f64,
        accessible: Option<bool>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            start: &'a str,
            end: &'a str,
            distance: f64,
            #[serde(skip_serializing_if = "Option::is_none")]
            accessible: Option<bool>,
        }

        let body = CreateRequest {
            start,
            end,
            distance,
            accessible,
        };
        let req = self.request(Method::POST, "/api/v1/edges").json(&body);
        self.execute(req).await
    }

    pub async fn delete_edge(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/edges/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Stats
    // =========================================================================

    pub async fn stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/stats");
        self.execute(req).await
    }
}
