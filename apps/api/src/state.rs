use std::sync::Arc;

use crate::config::Config;
use crate::report::assets::ReportAssets;
use crate::report::renderer::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Logo images loaded once at startup and reused for every render.
    /// Immutable after startup; no module-level singletons.
    pub assets: Arc<ReportAssets>,
    /// Pluggable rendering backend. Default: ChromiumRenderer. Tests swap in a mock.
    pub renderer: Arc<dyn PdfRenderer>,
}
