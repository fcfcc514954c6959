//! Rendering backend — turns a fully substituted HTML string into PDF bytes.
//!
//! The backend sits behind a trait so tests can swap in a mock without a
//! Chromium install. `AppState` holds an `Arc<dyn PdfRenderer>`.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::errors::AppError;

/// A4 page, in inches.
const PAPER_WIDTH_IN: f64 = 8.27;
const PAPER_HEIGHT_IN: f64 = 11.7;
/// Uniform margin on all four sides, in inches.
const MARGIN_IN: f64 = 0.8;

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: String) -> Result<Vec<u8>, AppError>;
}

/// Per-request headless Chromium launch. Each render gets its own isolated
/// browser process; nothing is pooled or shared across requests, and the
/// process is torn down on every exit path.
pub struct ChromiumRenderer;

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, html: String) -> Result<Vec<u8>, AppError> {
        // headless_chrome drives the browser over a blocking websocket, so the
        // whole render runs off the async runtime.
        tokio::task::spawn_blocking(move || render_blocking(&html))
            .await
            .map_err(|e| AppError::RenderFailure(format!("render task failed: {e}")))?
    }
}

fn render_blocking(html: &str) -> Result<Vec<u8>, AppError> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .build()
        .map_err(render_err)?;

    // Browser owns the Chromium process; dropping it (on success or any `?`
    // below) kills the process, so no exit path leaks it.
    let browser = Browser::new(options).map_err(render_err)?;
    let tab = browser.new_tab().map_err(render_err)?;

    // The document plus its inline data-URI images travel as a single data
    // URL. Waiting for navigation to settle before capturing guards against a
    // truncated render of any asynchronously loading resource.
    let data_url = format!("data:text/html;base64,{}", BASE64.encode(html));
    tab.navigate_to(&data_url).map_err(render_err)?;
    tab.wait_until_navigated().map_err(render_err)?;

    tab.print_to_pdf(Some(pdf_options())).map_err(render_err)
}

fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(PAPER_WIDTH_IN),
        paper_height: Some(PAPER_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}

fn render_err(e: impl std::fmt::Display) -> AppError {
    AppError::RenderFailure(e.to_string())
}
