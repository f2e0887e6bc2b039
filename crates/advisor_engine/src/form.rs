use advisor_core::{DocumentSlot, PdfDocument, Submission, GITHUB_PROFILE_FIELD, POSITION_FIELD};
use reqwest::multipart::{Form, Part};

use crate::{AnalysisError, FailureKind};

const PDF_MIME: &str = "application/pdf";

/// Names of the multipart parts a submission produces, in send order.
pub fn part_names(submission: &Submission) -> Vec<&'static str> {
    let mut names = vec![
        POSITION_FIELD,
        DocumentSlot::Transcript.form_field(),
        DocumentSlot::Resume.form_field(),
    ];
    if submission.github_profile.is_some() {
        names.push(GITHUB_PROFILE_FIELD);
    }
    names
}

/// Reads both documents and assembles the multipart body.
pub async fn build_form(submission: &Submission) -> Result<Form, AnalysisError> {
    let mut form = Form::new()
        .text(POSITION_FIELD, submission.desired_position.clone())
        .part(
            DocumentSlot::Transcript.form_field(),
            pdf_part(&submission.transcript).await?,
        )
        .part(
            DocumentSlot::Resume.form_field(),
            pdf_part(&submission.resume).await?,
        );

    if let Some(profile) = &submission.github_profile {
        form = form.text(GITHUB_PROFILE_FIELD, profile.clone());
    }
    Ok(form)
}

async fn pdf_part(document: &PdfDocument) -> Result<Part, AnalysisError> {
    let bytes = tokio::fs::read(&document.path).await.map_err(|err| {
        AnalysisError::new(
            FailureKind::ReadDocument {
                path: document.path.display().to_string(),
            },
            err.to_string(),
        )
    })?;

    Part::bytes(bytes)
        .file_name(document.name.clone())
        .mime_str(PDF_MIME)
        .map_err(|err| AnalysisError::new(FailureKind::BuildRequest, err.to_string()))
}
