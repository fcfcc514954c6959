//! Report generation — merges a scored questionnaire result into the HTML
//! template and hands it to the rendering backend.
//!
//! Flow: coerce score → classify band → derive chart values → load template →
//!       literal token substitution → render to PDF bytes.

use chrono::Local;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::report::assets::ReportAssets;
use crate::report::renderer::PdfRenderer;
use crate::report::score_band::{classify, coerce_score, ScoreBand};

/// Normalized payload handed to the generator by the endpoint.
///
/// `category`/`recommendation`/`description` are whatever the caller supplied
/// and are carried for completeness only — the generator recomputes its own
/// band text from the score, and that is what appears in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportData {
    pub result: ReportResult,
    pub answers: Map<String, Value>,
    pub questions: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportResult {
    /// Number or string on the wire; coerced leniently. Absent means 0.
    #[serde(default)]
    pub score: Value,
    pub category: Option<String>,
    pub recommendation: Option<String>,
    pub description: Option<String>,
}

pub async fn generate_report_pdf(
    data: &ReportData,
    assets: &ReportAssets,
    template_path: &str,
    renderer: &dyn PdfRenderer,
) -> Result<Vec<u8>, AppError> {
    let score = coerce_score(&data.result.score);
    let band = classify(score);

    let template = std::fs::read_to_string(template_path)
        .map_err(|_| AppError::TemplateMissing(template_path.to_string()))?;

    let html = fill_template(&template, score, band, assets);

    renderer.render(html).await
}

/// Literal substring substitution of every placeholder token.
///
/// All occurrences of each token are replaced (the score token appears more
/// than once in the template); tokens the template does not contain, or that
/// we do not know, are left verbatim. No escaping — all interpolated text is
/// internal, pre-vetted copy.
fn fill_template(template: &str, score: f64, band: ScoreBand, assets: &ReportAssets) -> String {
    let chart_degrees = (score / 100.0) * 360.0;
    let remaining = 100.0 - score;

    template
        .replace("{{CATEGORY}}", band.category)
        .replace("{{DESCRIPTION}}", band.description)
        .replace("{{RECOMMENDATION}}", band.recommendation)
        .replace("{{SCORE}}", &format!("{score:.0}"))
        .replace("{{REMAINING_SCORE}}", &format!("{remaining:.0}"))
        .replace("{{CHART_SCORE_DEG}}", &chart_degrees.to_string())
        .replace("{{DATE}}", &Local::now().format("%d/%m/%Y").to_string())
        .replace("{{LOGO_COMPOSITE_URL}}", &assets.lumis_logo_uri)
        .replace("{{LOGO_FAMETRO_URL}}", &assets.fametro_logo_uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::io::Write;

    /// Renderer double that returns the HTML it was given as "PDF" bytes,
    /// so tests can assert on the substituted document.
    struct EchoRenderer;

    #[async_trait]
    impl PdfRenderer for EchoRenderer {
        async fn render(&self, html: String) -> Result<Vec<u8>, AppError> {
            Ok(html.into_bytes())
        }
    }

    fn make_data(score: Value) -> ReportData {
        ReportData {
            result: ReportResult {
                score,
                category: None,
                recommendation: None,
                description: None,
            },
            answers: Map::new(),
            questions: json!({}),
        }
    }

    #[test]
    fn test_chart_degrees_is_proportional() {
        let html = fill_template(
            "deg={{CHART_SCORE_DEG}}",
            50.0,
            classify(50.0),
            &ReportAssets::default(),
        );
        assert_eq!(html, "deg=180");
    }

    #[test]
    fn test_remaining_score_complements_to_100() {
        let html = fill_template(
            "rest={{REMAINING_SCORE}}",
            70.0,
            classify(70.0),
            &ReportAssets::default(),
        );
        assert_eq!(html, "rest=30");
    }

    #[test]
    fn test_every_occurrence_of_score_token_is_replaced() {
        let html = fill_template(
            "{{SCORE}} / {{SCORE}} / {{SCORE}}",
            85.0,
            classify(85.0),
            &ReportAssets::default(),
        );
        assert_eq!(html, "85 / 85 / 85");
        assert!(!html.contains("{{SCORE}}"));
    }

    #[test]
    fn test_unknown_tokens_survive_verbatim() {
        let html = fill_template(
            "{{SCORE}} {{NOT_A_TOKEN}}",
            10.0,
            classify(10.0),
            &ReportAssets::default(),
        );
        assert!(html.contains("{{NOT_A_TOKEN}}"));
    }

    #[test]
    fn test_band_copy_lands_in_template() {
        let html = fill_template(
            "{{CATEGORY}}|{{DESCRIPTION}}|{{RECOMMENDATION}}",
            85.0,
            classify(85.0),
            &ReportAssets::default(),
        );
        assert!(html.contains("Alta Probabilidade de Traços no Espectro"));
    }

    #[tokio::test]
    async fn test_missing_template_is_a_template_error() {
        let data = make_data(json!(50));
        let err = generate_report_pdf(
            &data,
            &ReportAssets::default(),
            "/nonexistent/reportTemplate.html",
            &EchoRenderer,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::TemplateMissing(_)));
    }

    #[tokio::test]
    async fn test_generate_recomputes_band_ignoring_caller_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reportTemplate.html");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"<h1>{{CATEGORY}}</h1><p>{{SCORE}}</p>").unwrap();

        let mut data = make_data(json!(85));
        data.result.category = Some("caller-supplied label".to_string());

        let bytes = generate_report_pdf(
            &data,
            &ReportAssets::default(),
            path.to_str().unwrap(),
            &EchoRenderer,
        )
        .await
        .unwrap();

        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("Alta Probabilidade de Traços no Espectro"));
        assert!(!html.contains("caller-supplied label"));
        assert!(html.contains("<p>85</p>"));
    }

    #[tokio::test]
    async fn test_string_score_renders_like_numeric() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reportTemplate.html");
        std::fs::write(&path, "{{SCORE}}").unwrap();

        let bytes = generate_report_pdf(
            &make_data(json!("42")),
            &ReportAssets::default(),
            path.to_str().unwrap(),
            &EchoRenderer,
        )
        .await
        .unwrap();
        assert_eq!(bytes, b"42");
    }
}
