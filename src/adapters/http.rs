use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::domain::ports::{ConfigProvider, ConversionService};
use crate::utils::error::{ConverterError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Talks to the remote conversion service:
/// `POST {base_url}/convert/romanToInteger` and
/// `POST {base_url}/convert/integerToRoman`.
#[derive(Debug, Clone)]
pub struct HttpConversionService {
    client: Client,
    base_url: String,
}

impl HttpConversionService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, request: &ConversionRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint_path())
    }
}

#[async_trait]
impl ConversionService for HttpConversionService {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        let url = self.endpoint_url(request);
        tracing::debug!("POST {} with '{}'", url, request.value());

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        tracing::debug!("Conversion service response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConverterError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        // 兩個欄位都必須存在，否則視為錯誤回應
        serde_json::from_str::<ConversionResult>(&body).map_err(|e| {
            ConverterError::MalformedResponse {
                message: e.to_string(),
            }
        })
    }
}
