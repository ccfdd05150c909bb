//! Local-disk file storage for CVs, formalization documents, and memos.
//!
//! References are relative "folder/filename" strings stored on the owning
//! rows. Retrieval is proxied through the backend so the storage layout is
//! never exposed to clients.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::server::error::storage::StorageError;

/// Uploaded file contents as received from a multipart request.
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// File retrieved from storage, ready to serve.
pub struct StoredFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

#[derive(Clone)]
pub struct FileStore {
    root: Arc<PathBuf>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Stores a file under `folder`, returning its reference string.
    ///
    /// The reference includes the prefixed, sanitized filename so repeated
    /// uploads with the same name overwrite rather than accumulate.
    pub async fn store(
        &self,
        folder: &str,
        prefix: &str,
        file: &UploadedFile,
    ) -> Result<String, StorageError> {
        let filename = format!("{prefix}{}", sanitize_filename(&file.filename));
        let reference = format!("{folder}/{filename}");

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), &file.bytes).await?;

        Ok(reference)
    }

    /// Reads a stored file back by its reference.
    pub async fn retrieve(&self, reference: &str) -> Result<StoredFile, StorageError> {
        let path = self.resolve(reference)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(reference.to_string()))
            }
            Err(e) => return Err(StorageError::Unavailable(e)),
        };

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(StoredFile {
            bytes,
            content_type,
            filename,
        })
    }

    /// Maps a reference to a path under the storage root, rejecting traversal.
    fn resolve(&self, reference: &str) -> Result<PathBuf, StorageError> {
        let path = Path::new(reference);
        let traversal = path.is_absolute()
            || path
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)));

        if reference.is_empty() || traversal {
            return Err(StorageError::InvalidReference(reference.to_string()));
        }

        Ok(self.root.join(path))
    }
}

/// Keeps alphanumerics, dots, dashes, and underscores; everything else
/// becomes an underscore. Mirrors what the upload endpoints accept.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "archivo".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{sanitize_filename, FileStore, UploadedFile};
    use crate::server::error::storage::StorageError;

    fn temp_store(tag: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("vinculo-storage-{tag}-{}", std::process::id()));
        FileStore::new(dir)
    }

    mod store {
        use super::*;

        /// Expect the returned reference to round-trip through retrieve
        #[tokio::test]
        async fn stores_and_retrieves_file() {
            let store = temp_store("roundtrip");
            let file = UploadedFile {
                filename: "cv final.pdf".to_string(),
                bytes: b"%PDF-1.4".to_vec(),
            };

            let reference = store.store("cvs", "cv_1_", &file).await.unwrap();
            assert_eq!(reference, "cvs/cv_1_cv_final.pdf");

            let stored = store.retrieve(&reference).await.unwrap();
            assert_eq!(stored.bytes, b"%PDF-1.4");
            assert_eq!(stored.content_type, "application/pdf");
        }
    }

    mod retrieve {
        use super::*;

        /// Expect NotFound for a reference that was never stored
        #[tokio::test]
        async fn returns_not_found_for_missing_reference() {
            let store = temp_store("missing");

            let result = store.retrieve("cvs/nope.pdf").await;

            assert!(matches!(result, Err(StorageError::NotFound(_))));
        }

        /// Expect InvalidReference when the reference escapes the root
        #[tokio::test]
        async fn rejects_path_traversal() {
            let store = temp_store("traversal");

            let result = store.retrieve("../etc/passwd").await;

            assert!(matches!(result, Err(StorageError::InvalidReference(_))));
        }
    }

    mod sanitize {
        use super::sanitize_filename;

        /// Expect separators and spaces to be replaced
        #[test]
        fn replaces_unsafe_characters() {
            assert_eq!(sanitize_filename("../../x y.pdf"), "x_y.pdf");
            assert_eq!(sanitize_filename("memo#1.docx"), "memo_1.docx");
        }

        /// Expect a fallback name when nothing safe remains
        #[test]
        fn falls_back_when_empty() {
            assert_eq!(sanitize_filename("..."), "archivo");
        }
    }
}
