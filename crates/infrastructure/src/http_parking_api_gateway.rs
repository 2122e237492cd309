use async_trait::async_trait;
use parkwatch_application::ParkingApiGateway;
use parkwatch_core::{AppError, AppResult};
use parkwatch_domain::ResourcePath;
use serde_json::Value;
use tracing::warn;
use url::Url;

/// HTTP implementation of the parking resource API reads.
pub struct HttpParkingApiGateway {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpParkingApiGateway {
    /// Creates a gateway rooted at `base_url`.
    ///
    /// Any path on `base_url` is kept and resource paths are appended to it.
    pub fn new(http_client: reqwest::Client, base_url: Url) -> AppResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "API_URL '{base_url}' cannot be used as a base URL"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn resource_url(&self, path: &ResourcePath) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!("API_URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(path.segments());

        Ok(url)
    }
}

#[async_trait]
impl ParkingApiGateway for HttpParkingApiGateway {
    async fn get_json(&self, path: &ResourcePath, bearer_token: &str) -> AppResult<Value> {
        let url = self.resource_url(path)?;
        let response = self
            .http_client
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|error| {
                warn!(path = %path, error = %error, "upstream request failed");
                AppError::upstream(format!("request to {path} failed: {error}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());

        if !status.is_success() {
            warn!(path = %path, status = %status, "upstream returned failure status");
            return Err(AppError::Upstream {
                status: Some(status.as_u16()),
                body,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|error| {
            AppError::upstream(format!("response from {path} is not valid JSON: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use parkwatch_application::ParkingApiGateway;
    use parkwatch_core::{AppError, AppResult};
    use parkwatch_domain::{FacilityId, ResourcePath};
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::HttpParkingApiGateway;

    fn gateway_for(base_url: &str) -> AppResult<HttpParkingApiGateway> {
        let base_url =
            Url::parse(base_url).map_err(|error| AppError::Validation(error.to_string()))?;
        HttpParkingApiGateway::new(reqwest::Client::new(), base_url)
    }

    #[tokio::test]
    async fn sends_bearer_token_and_returns_json_body() -> AppResult<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/facilities/P-1/capacity"))
            .and(header("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"totalCapacity":20}"#))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&format!("{}/v1", server.uri()))?;
        let facility_id = FacilityId::new("P-1")?;
        let body = gateway
            .get_json(&ResourcePath::facility_capacity(&facility_id), "token-1")
            .await?;

        assert_eq!(body, json!({ "totalCapacity": 20 }));
        Ok(())
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_is_not_doubled() -> AppResult<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/facilities"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&format!("{}/", server.uri()))?;
        let body = gateway
            .get_json(&ResourcePath::facilities(), "token-1")
            .await?;

        assert_eq!(body, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn facility_id_is_encoded_as_one_segment() -> AppResult<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/facilities/a%2Fb/occupation"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri())?;
        let facility_id = FacilityId::new("a/b")?;
        gateway
            .get_json(&ResourcePath::facility_occupation(&facility_id), "token-1")
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn failure_status_carries_upstream_body() -> AppResult<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/facilities"))
            .respond_with(ResponseTemplate::new(404).set_body_string("facility not found"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri())?;
        let result = gateway
            .get_json(&ResourcePath::facilities(), "token-1")
            .await;

        match result {
            Err(AppError::Upstream { status, body }) => {
                assert_eq!(status, Some(404));
                assert_eq!(body, "facility not found");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn non_json_body_is_an_upstream_error() -> AppResult<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/facilities"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri())?;
        let result = gateway
            .get_json(&ResourcePath::facilities(), "token-1")
            .await;

        assert!(matches!(result, Err(AppError::Upstream { status: None, .. })));
        Ok(())
    }
}
