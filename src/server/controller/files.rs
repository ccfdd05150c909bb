use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
    },
};

pub static FILES_TAG: &str = "files";

/// Serve a stored file by its reference
#[utoipa::path(
    get,
    path = "/api/files/{reference}",
    tag = FILES_TAG,
    params(("reference" = String, Path, description = "Storage reference, folder/filename")),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Malformed reference", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn serve_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let file = state.storage.retrieve(&reference).await?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    ))
}
