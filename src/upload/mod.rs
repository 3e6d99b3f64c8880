use crate::models::Attachment;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Only PDF files are allowed")]
    NotPdf { name: String },

    #[error("File conversion failed")]
    FileRead { name: String, detail: String },
}

/// A selected file that can be checked and read.
///
/// Implemented for `web_sys::File`; tests use in-memory fakes.
#[async_trait(?Send)]
pub trait AttachmentSource {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    /// Reads the whole file. The error is a human-readable detail.
    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}

#[async_trait(?Send)]
impl AttachmentSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| format!("{e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Accepts a file if its MIME type mentions pdf or its name ends in `.pdf`
/// (any case).
pub fn is_pdf(name: &str, mime_type: &str) -> bool {
    mime_type.contains("pdf") || name.to_lowercase().ends_with(".pdf")
}

/// All-or-nothing check of a selection; reports the first offending file.
pub fn validate_selection<S: AttachmentSource>(files: &[S]) -> Result<(), UploadError> {
    match files.iter().find(|f| !is_pdf(&f.file_name(), &f.mime_type())) {
        Some(bad) => Err(UploadError::NotPdf {
            name: bad.file_name(),
        }),
        None => Ok(()),
    }
}

/// Preview lines for an accepted selection, in selection order.
pub fn preview_names<S: AttachmentSource>(files: &[S]) -> Vec<String> {
    files.iter().map(|f| f.file_name()).collect()
}

pub async fn encode_attachment<S: AttachmentSource + ?Sized>(
    file: &S,
) -> Result<Attachment, UploadError> {
    let name = file.file_name();
    let mime_type = file.mime_type();

    if !is_pdf(&name, &mime_type) {
        return Err(UploadError::NotPdf { name });
    }

    let bytes = file
        .read_bytes()
        .await
        .map_err(|detail| UploadError::FileRead {
            name: name.clone(),
            detail,
        })?;

    Ok(Attachment {
        name,
        mime_type,
        content: STANDARD.encode(bytes),
    })
}

/// Encodes files one at a time, in order. The first failure abandons the
/// whole batch.
pub async fn encode_attachments<S: AttachmentSource>(
    files: &[S],
) -> Result<Vec<Attachment>, UploadError> {
    let mut out = Vec::with_capacity(files.len());
    for file in files {
        out.push(encode_attachment(file).await?);
    }
    Ok(out)
}

/// Snapshot of an input's `FileList`.
pub fn files_of(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}
