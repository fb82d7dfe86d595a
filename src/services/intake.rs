use axum::extract::Multipart;
use chroma_sort::ImageInput;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::AppConfig;

/// Multipart field names that carry image files
const FILE_FIELDS: [&str; 2] = ["files[]", "files"];

/// A parsed upload form
#[derive(Debug, Default)]
pub struct Upload {
    /// Plain text form fields
    pub fields: HashMap<String, String>,
    /// Accepted images in submission order
    pub images: Vec<ImageInput>,
    /// Filenames dropped by the extension filter
    pub rejected: Vec<String>,
}

impl Upload {
    pub fn total_bytes(&self) -> usize {
        self.images.iter().map(|i| i.bytes.len()).sum()
    }
}

/// Read an upload form, keeping files with an allowed extension
pub async fn read_upload(mut multipart: Multipart, config: &AppConfig) -> Result<Upload, ApiError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if FILE_FIELDS.contains(&name.as_str()) {
            let original = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;

            // Browsers send an empty part when no file was chosen
            if original.is_empty() && bytes.is_empty() {
                continue;
            }
            if !config.is_allowed_file(&original) {
                tracing::debug!(filename = %original, "Ignoring file with disallowed extension");
                upload.rejected.push(original);
                continue;
            }

            let filename = secure_filename(&original);
            let filename = if filename.is_empty() {
                format!("upload_{}", upload.images.len())
            } else {
                filename
            };
            upload.images.push(ImageInput::new(filename, bytes.to_vec()));
        } else if !name.is_empty() {
            let value = field.text().await?;
            upload.fields.insert(name, value);
        }
    }

    tracing::debug!(
        images = upload.images.len(),
        rejected = upload.rejected.len(),
        bytes = upload.total_bytes(),
        "Read upload"
    );

    Ok(upload)
}

/// Reduce a client-supplied filename to a safe ASCII name
///
/// Path separators become spaces, characters outside `[A-Za-z0-9_.-]` are
/// dropped, whitespace runs collapse to `_`, and leading/trailing `.` and
/// `_` are stripped. The result may be empty.
pub fn secure_filename(filename: &str) -> String {
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
