pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpConversionService, LocalConversionService};
pub use core::{
    converter::{ConverterStatus, NetworkedConverter},
    translator::LocalTranslator,
};
pub use domain::model::{ConversionRequest, ConversionResult, ConverterMode, Field, FieldState};
pub use domain::ports::{ConfigProvider, ConversionService};
pub use utils::error::{ConverterError, Result};
