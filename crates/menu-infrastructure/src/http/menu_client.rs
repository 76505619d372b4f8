use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use menu_core::{MenuError, MenuRepository, RawMenuRecord};
use menu_shared::config::ApiSettings;

/// Request envelope of the console API proxy
#[derive(Debug, Serialize)]
struct CommonRequest {
    request: Value,
}

/// Response envelope of the console API proxy
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommonResponse {
    #[serde(default)]
    response_data: Value,
    #[serde(default)]
    status: Option<WebStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebStatus {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

impl WebStatus {
    fn code(&self) -> Option<u16> {
        self.status_code.or(self.code)
    }
}

/// Fetches the current user's menu resources through the API proxy:
/// `POST {base_url}/{subsystem}/{operation}`.
#[derive(Clone)]
pub struct HttpMenuRepository {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpMenuRepository {
    pub fn new(settings: &ApiSettings) -> Result<Self, MenuError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| MenuError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/{}/{}",
                settings.base_url.trim_end_matches('/'),
                settings.subsystem,
                settings.operation
            ),
            token: settings.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MenuRepository for HttpMenuRepository {
    async fn fetch_raw_menus(&self) -> Result<Vec<RawMenuRecord>, MenuError> {
        debug!("Fetching menu resources from {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&CommonRequest { request: Value::Object(Default::default()) });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MenuError::Transport(format!("Failed to call menu API: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("Menu API returned 404, treating as no menus");
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .map_err(|e| MenuError::Transport(format!("Failed to read menu API response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<CommonResponse>(&body)
                .ok()
                .and_then(|r| r.status)
                .map(|s| s.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(body);
            return Err(MenuError::Transport(format!("Menu API error: {} - {}", status, message)));
        }

        let envelope: CommonResponse = serde_json::from_str(&body)
            .map_err(|e| MenuError::Transport(format!("Invalid menu API response: {}", e)))?;

        if let Some(code) = envelope.status.as_ref().and_then(WebStatus::code) {
            if code != 200 {
                let message = envelope.status.map(|s| s.message).unwrap_or_default();
                return Err(MenuError::Transport(format!("Menu API error: {} - {}", code, message)));
            }
        }

        match envelope.response_data {
            Value::Null => Ok(Vec::new()),
            data @ Value::Array(_) => {
                let menus: Vec<RawMenuRecord> = serde_json::from_value(data).map_err(|e| {
                    MenuError::MalformedMenuData(format!("Invalid menu resource: {}", e))
                })?;
                debug!("Menu API returned {} top-level menus", menus.len());
                Ok(menus)
            }
            other => Err(MenuError::Transport(format!(
                "Menu API responseData is not an array: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::RawScalar;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str, token: Option<&str>) -> ApiSettings {
        ApiSettings {
            base_url: base_url.to_string(),
            subsystem: "mc-iam-manager".to_string(),
            operation: "Getallavailablemenus".to_string(),
            token: token.map(str::to_string),
            timeout_seconds: 5,
        }
    }

    fn repo_for(server: &MockServer, token: Option<&str>) -> HttpMenuRepository {
        HttpMenuRepository::new(&settings(&format!("{}/api", server.uri()), token)).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_and_decodes_menu_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/mc-iam-manager/Getallavailablemenus"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(json!({ "request": {} })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": [
                    { "id": "operations", "parentId": "home", "displayName": "Operations",
                      "isAction": "false", "priority": "1", "menuNumber": "1000" },
                    { "id": "workloads", "parentId": "operations", "displayName": "Workloads",
                      "isAction": true, "priority": 1, "menuNumber": 1100 }
                ],
                "status": { "code": 200, "message": "success" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let repo = repo_for(&server, Some("secret"));
        let menus = repo.fetch_raw_menus().await.unwrap();

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].id, "operations");
        assert_eq!(menus[1].parent_id.as_deref(), Some("operations"));
        assert_eq!(menus[1].is_action, Some(RawScalar::Bool(true)));
    }

    #[tokio::test]
    async fn test_not_found_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        assert!(repo.fetch_raw_menus().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_response_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": null,
                "status": { "code": 200, "message": "" }
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        assert!(repo.fetch_raw_menus().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "responseData": null,
                "status": { "code": 500, "message": "iam unavailable" }
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        let err = repo.fetch_raw_menus().await.unwrap_err();
        assert!(matches!(err, MenuError::Transport(msg) if msg.contains("iam unavailable")));
    }

    #[tokio::test]
    async fn test_envelope_failure_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": [],
                "status": { "statusCode": 401, "message": "token expired" }
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        let err = repo.fetch_raw_menus().await.unwrap_err();
        assert!(matches!(err, MenuError::Transport(msg) if msg.contains("token expired")));
    }

    #[tokio::test]
    async fn test_non_array_payload_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": { "menus": [] }
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        assert!(matches!(
            repo.fetch_raw_menus().await,
            Err(MenuError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_record_without_id_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": [ { "displayName": "nameless" } ]
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server, None);
        assert!(matches!(
            repo.fetch_raw_menus().await,
            Err(MenuError::MalformedMenuData(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        for base_url in ["http://console.local/api", "http://console.local/api/"] {
            let repo = HttpMenuRepository::new(&settings(base_url, None)).unwrap();
            assert_eq!(
                repo.endpoint(),
                "http://console.local/api/mc-iam-manager/Getallavailablemenus"
            );
        }
    }
}
