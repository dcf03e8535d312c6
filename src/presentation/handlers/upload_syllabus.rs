use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::Topic;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadSyllabusResponse {
    pub uid: Option<String>,
    pub topics: Vec<Topic>,
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

fn error_response(status: StatusCode, error: String, stage: Option<&'static str>) -> Response {
    (status, Json(ErrorResponse { error, stage })).into_response()
}

struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_syllabus_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut uid: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e),
                    None,
                );
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("uid") => match field.text().await {
                Ok(value) => uid = Some(value),
                Err(e) => {
                    return error_response(e.status(), format!("Failed to read uid: {}", e), None);
                }
            },
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                match field.bytes().await {
                    Ok(data) => {
                        file = Some(UploadedFile {
                            filename,
                            data: data.to_vec(),
                        })
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            e.status(),
                            format!("Failed to read file: {}", e),
                            None,
                        );
                    }
                }
            }
            other => tracing::debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    let Some(file) = file else {
        tracing::warn!("Upload request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string(), None);
    };

    if file.data.len() > state.max_upload_bytes {
        tracing::warn!(bytes = file.data.len(), "Upload exceeds size limit");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("File exceeds {} bytes", state.max_upload_bytes),
            None,
        );
    }

    tracing::debug!(filename = %file.filename, bytes = file.data.len(), "Syllabus received");

    match state.topic_service.extract(&file.data, file.filename).await {
        Ok(extraction) => {
            tracing::info!(
                uid = ?uid,
                topic_count = extraction.topics.len(),
                source = %extraction.source,
                "Syllabus processed"
            );
            (
                StatusCode::OK,
                Json(UploadSyllabusResponse {
                    uid,
                    topics: extraction.topics,
                    text: extraction.text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, stage = e.stage(), "Syllabus processing failed");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string(), Some(e.stage()))
        }
    }
}
