pub mod cache;

// Re-export use cases
pub use cache::{ExportCacheUseCase, ExportSummary, LoadCacheUseCase};
