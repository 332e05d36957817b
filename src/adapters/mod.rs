// Adapters layer: concrete conversion services behind the `ConversionService` port.

pub mod http;
pub mod local;

pub use http::HttpConversionService;
pub use local::LocalConversionService;
