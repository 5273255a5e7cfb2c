//! Identity provider client
//!
//! The dashboard never runs an OAuth flow itself. It receives an access
//! token (environment or `--token`) and asks the provider's user-info
//! endpoint who the token belongs to.

use crate::gateway::GatewayError;
use async_trait::async_trait;
use serde::Deserialize;

/// The part of the user-info response the dashboard uses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Resolves an access token to a profile
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, GatewayError>;
}

/// User-info lookup over HTTP with a bearer token
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    userinfo_url: String,
}

impl HttpIdentityProvider {
    pub fn new(client: reqwest::Client, userinfo_url: impl Into<String>) -> Self {
        Self {
            client,
            userinfo_url: userinfo_url.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, GatewayError> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "user-info lookup returned {}",
                status.as_u16()
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        serde_json::from_str(&raw)
            .map_err(|e| GatewayError::MalformedResponse(format!("user-info: {}", e)))
    }
}

/// Accepts any non-empty token and answers with a fixed demo student
pub struct DemoIdentityProvider;

/// Email of the demo student
pub const DEMO_EMAIL: &str = "asha.rao@demo.classdash.dev";

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, GatewayError> {
        if access_token.trim().is_empty() {
            return Err(GatewayError::Transport("empty access token".to_string()));
        }
        Ok(Profile {
            email: DEMO_EMAIL.to_string(),
            name: Some("Asha Rao".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn userinfo(headers: HeaderMap) -> Result<Json<serde_json::Value>, StatusCode> {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer good-token") => Ok(Json(serde_json::json!({
                "sub": "1234",
                "email": "asha@example.edu",
                "name": "Asha",
                "picture": "https://example.edu/a.png"
            }))),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    #[tokio::test]
    async fn resolves_profile_with_bearer_token() {
        let base = serve(Router::new().route("/userinfo", get(userinfo))).await;
        let provider =
            HttpIdentityProvider::new(reqwest::Client::new(), format!("{}/userinfo", base));

        let profile = provider.fetch_profile("good-token").await.unwrap();
        assert_eq!(
            profile,
            Profile {
                email: "asha@example.edu".to_string(),
                name: Some("Asha".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn rejected_token_is_transport_error() {
        let base = serve(Router::new().route("/userinfo", get(userinfo))).await;
        let provider =
            HttpIdentityProvider::new(reqwest::Client::new(), format!("{}/userinfo", base));

        let err = provider.fetch_profile("bad-token").await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn demo_provider_rejects_empty_token() {
        assert!(DemoIdentityProvider.fetch_profile("").await.is_err());
        let profile = DemoIdentityProvider.fetch_profile("anything").await.unwrap();
        assert_eq!(profile.email, DEMO_EMAIL);
    }
}
