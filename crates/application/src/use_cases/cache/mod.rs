pub mod export_cache;
pub mod load_cache;

pub use export_cache::{ExportCacheUseCase, ExportSummary};
pub use load_cache::LoadCacheUseCase;
