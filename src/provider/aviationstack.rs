//! aviationstack provider adapter

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::provider::types::{FlightPage, SearchFilter};
use crate::provider::FlightProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};

/// aviationstack REST client, authenticated by a static access key
pub struct AviationstackClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl AviationstackClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }
}

#[async_trait]
impl FlightProvider for AviationstackClient {
    fn id(&self) -> &'static str {
        "aviationstack"
    }

    async fn fetch_flights(&self, filter: &SearchFilter) -> Result<FlightPage> {
        let mut params = vec![("access_key", self.access_key.clone())];
        params.extend(filter.to_query_params());

        let response = self
            .client
            .get(format!("{}/flights", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Api(describe_api_error(status, &body)));
        }

        parse_flight_page(&body)
    }
}

/// Parse a response body into a page of flights
pub fn parse_flight_page(body: &str) -> Result<FlightPage> {
    let page: FlightPage = serde_json::from_str(body)?;
    Ok(page)
}

/// Error envelope the provider returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default, deserialize_with = "deserialize_optional_code")]
    code: Option<String>,
    message: Option<String>,
}

/// Deserialize an error code that could be either a string or an integer
fn deserialize_optional_code<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CodeRepr {
        String(String),
        Int(i64),
        Null,
    }

    match Option::<CodeRepr>::deserialize(deserializer)? {
        Some(CodeRepr::String(s)) if s.is_empty() => Ok(None),
        Some(CodeRepr::String(s)) => Ok(Some(s)),
        Some(CodeRepr::Int(i)) => Ok(Some(i.to_string())),
        Some(CodeRepr::Null) | None => Ok(None),
    }
}

fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(envelope) => match (envelope.error.code, envelope.error.message) {
            (Some(code), Some(message)) => format!("{} ({})", message, code),
            (None, Some(message)) => message,
            (Some(code), None) => format!("request rejected ({})", code),
            (None, None) => format!("request failed with status {}", status),
        },
        Err(_) => format!("request failed with status {}", status),
    }
}
