//! Multipart form collection for upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{error::Error, storage::UploadedFile};

/// Text fields plus at most one uploaded file from a multipart request.
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Returns the uploaded file or a validation error naming the field.
    pub fn require_file(self, field: &str) -> Result<UploadedFile, Error> {
        self.file
            .ok_or_else(|| Error::ValidationError(format!("Falta el archivo {field:?}")))
    }
}

pub async fn collect(mut multipart: Multipart) -> Result<MultipartForm, Error> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::ValidationError(format!("Formulario inválido: {error}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name() {
            Some(filename) => {
                let filename = filename.to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|error| {
                        Error::ValidationError(format!("Archivo inválido: {error}"))
                    })?
                    .to_vec();

                file = Some(UploadedFile { filename, bytes });
            }
            None => {
                let value = field.text().await.map_err(|error| {
                    Error::ValidationError(format!("Campo inválido: {error}"))
                })?;

                fields.insert(name, value);
            }
        }
    }

    Ok(MultipartForm { fields, file })
}
