use crate::domain::model::{ConversionRequest, ConversionResult, ConverterMode};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can turn a [`ConversionRequest`] into both representations.
#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn mode(&self) -> ConverterMode;
}
