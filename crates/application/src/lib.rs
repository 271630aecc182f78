//! cachedump Application Layer
pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::renderers::{render, RenderOptions};
pub use use_cases::{ExportCacheUseCase, ExportSummary, LoadCacheUseCase};
