//! Axum route handler for PDF generation.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::report::generator::{generate_report_pdf, ReportData, ReportResult};
use crate::state::AppState;

/// Fixed download name for the generated report.
const CONTENT_DISPOSITION_VALUE: &str =
    "attachment; filename=\"Lumispect_Relatorio_Detalhado.pdf\"";

const REQUIRED_FIELDS_MESSAGE: &str =
    "Dados do questionário (respostas, perguntas e resultado) são necessários.";

/// Wire format of `POST /generate-pdf`. All three fields are required;
/// `answers` must also be non-empty. `answers` and `questions` are accepted
/// for completeness and passed through opaquely.
#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    pub answers: Option<Map<String, Value>>,
    pub result: Option<ReportResult>,
    pub questions: Option<Value>,
}

/// POST /generate-pdf
///
/// Validates the questionnaire payload, generates the PDF and streams it back
/// as an attachment with an explicit Content-Length.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Response, AppError> {
    let (answers, result, questions) = match (request.answers, request.result, request.questions) {
        (Some(answers), Some(result), Some(questions)) if !answers.is_empty() => {
            (answers, result, questions)
        }
        _ => return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    };

    info!("Received score: {}", result.score);

    let data = ReportData {
        result,
        answers,
        questions,
    };

    let pdf = generate_report_pdf(
        &data,
        &state.assets,
        &state.config.template_path,
        state.renderer.as_ref(),
    )
    .await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/pdf"),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(CONTENT_DISPOSITION_VALUE),
        ),
        (header::CONTENT_LENGTH, HeaderValue::from(pdf.len() as u64)),
    ];

    Ok((headers, pdf).into_response())
}
