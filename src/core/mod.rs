pub mod converter;
pub mod fields;
pub mod roman;
pub mod translator;

pub use crate::domain::model::{ConversionRequest, ConversionResult, Field, FieldState};
pub use crate::domain::ports::{ConfigProvider, ConversionService};
pub use crate::utils::error::Result;
