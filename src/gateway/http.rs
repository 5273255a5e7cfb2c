//! Gateway backed by the real records API

use super::{parse_class_list, parse_course_data, CourseDataRequest, FetchOutcome, Gateway, GatewayError};
use crate::config::ApiConfig;
use async_trait::async_trait;

/// Talks to the class list and course data endpoints over HTTPS
pub struct HttpGateway {
    client: reqwest::Client,
    classes_url: String,
    data_url: String,
}

impl HttpGateway {
    pub fn new(client: reqwest::Client, api: &ApiConfig) -> Self {
        Self {
            client,
            classes_url: api.classes_url.clone(),
            data_url: api.data_url.clone(),
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list_classes(&self) -> Result<Vec<String>, GatewayError> {
        tracing::debug!(url = %self.classes_url, "Fetching class list");

        let response = self
            .client
            .get(&self.classes_url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "class list returned {}",
                status.as_u16()
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let classes = parse_class_list(&raw)?;
        tracing::debug!(count = classes.len(), "Class list loaded");
        Ok(classes)
    }

    async fn fetch_course_data(
        &self,
        request: &CourseDataRequest,
    ) -> Result<FetchOutcome, GatewayError> {
        tracing::debug!(url = %self.data_url, class = %request.class, "Fetching course data");

        let response = self
            .client
            .post(&self.data_url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let raw = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        parse_course_data(status, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn gateway(base: &str) -> HttpGateway {
        let api = ApiConfig {
            classes_url: format!("{}/getClasses", base),
            data_url: format!("{}/getData", base),
            userinfo_url: format!("{}/userinfo", base),
        };
        HttpGateway::new(reqwest::Client::new(), &api)
    }

    fn request(email: &str) -> CourseDataRequest {
        CourseDataRequest {
            email: email.to_string(),
            encrypted_email: crate::obfuscation::derive_id(email),
            class: "CS-2024".to_string(),
        }
    }

    /// Answers 200 with one course for the known student, 404 otherwise.
    /// Also checks the derived id matches the plain email.
    async fn get_data(Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
        let email = body["email"].as_str().unwrap_or_default();
        let derived = body["encryptedEmail"].as_str().unwrap_or_default();
        if crate::obfuscation::derive_id(email) != derived || body["class"] != "CS-2024" {
            return Err(StatusCode::BAD_REQUEST);
        }
        if email != "asha@example.edu" {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(Json(json!([{
            "course_name": "[Math] Algebra",
            "data": { "Master": [{ "Student name": "Asha", "Grade": "A" }] }
        }])))
    }

    fn backend() -> Router {
        Router::new()
            .route(
                "/getClasses",
                get(|| async { Json(json!({ "body": "{\"folders\":[\"CS-2024\",\"EE-2024\"]}" })) }),
            )
            .route("/getData", post(get_data))
    }

    #[tokio::test]
    async fn lists_classes() {
        let base = serve(backend()).await;
        let classes = gateway(&base).list_classes().await.unwrap();
        assert_eq!(classes, vec!["CS-2024", "EE-2024"]);
    }

    #[tokio::test]
    async fn class_list_error_status_is_transport() {
        let router = Router::new().route(
            "/getClasses",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let err = gateway(&base).list_classes().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn fetches_courses_for_known_student() {
        let base = serve(backend()).await;
        let outcome = gateway(&base)
            .fetch_course_data(&request("asha@example.edu"))
            .await
            .unwrap();

        let FetchOutcome::Courses(courses) = outcome else {
            panic!("expected courses, got {:?}", outcome);
        };
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].master_row().unwrap()["Grade"], json!("A"));
    }

    #[tokio::test]
    async fn unknown_student_is_no_data() {
        let base = serve(backend()).await;
        let outcome = gateway(&base)
            .fetch_course_data(&request("ghost@example.edu"))
            .await
            .unwrap();
        assert_eq!(outcome, FetchOutcome::NoData { status: 404 });
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = gateway(&base)
            .fetch_course_data(&request("asha@example.edu"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
