use crate::core::roman;
use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::domain::ports::ConversionService;
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-process stand-in for the remote service.
#[derive(Debug, Clone, Default)]
pub struct LocalConversionService;

impl LocalConversionService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConversionService for LocalConversionService {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        roman::convert(request)
    }
}
