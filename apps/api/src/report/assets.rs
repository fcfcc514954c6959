//! Logo assets embedded into every report as inline data URIs.
//!
//! Loaded once at startup and carried in `AppState`; a missing file is logged
//! and degrades to an empty substitution instead of failing requests.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::error;

const LUMIS_LOGO_FILE: &str = "logo-lumis.png";
const FAMETRO_LOGO_FILE: &str = "logo-fametro.png";

/// Pre-encoded logo data URIs. Empty string means the asset was absent.
#[derive(Debug, Clone, Default)]
pub struct ReportAssets {
    pub lumis_logo_uri: String,
    pub fametro_logo_uri: String,
}

impl ReportAssets {
    pub fn load(assets_dir: &str) -> Self {
        let dir = Path::new(assets_dir);
        ReportAssets {
            lumis_logo_uri: load_png_data_uri(&dir.join(LUMIS_LOGO_FILE)),
            fametro_logo_uri: load_png_data_uri(&dir.join(FAMETRO_LOGO_FILE)),
        }
    }
}

fn load_png_data_uri(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => format!("data:image/png;base64,{}", BASE64.encode(bytes)),
        Err(e) => {
            error!("Logo not found at {}: {e}", path.display());
            String::new()
        }
    }
}
