use crate::{
    errors::PipelineError,
    store::{ArtifactStore, ArtifactStoreExt},
};
use jobprep_sdk::{
    data_url_payload, from_base64, to_base64, AnalysisBackend, JobAnalysis, JobAnalysisRequest,
    JobDescriptionPayload, ResumeAnalysis, ResumeAnalysisRequest, ResumePayload,
};
use std::sync::Arc;

/// Content classification of an uploaded file, deciding the transport
/// encoding and the payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Transmitted as base64 under `jdImg`.
    Image,
    /// Transmitted verbatim under `jd`.
    Text,
    /// Transmitted as base64 under `resume`.
    Pdf,
}

/// A user-chosen file, as handed over by the surrounding surface.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type reported by the picker, if any.
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: Some(mime_type.into()),
            bytes,
        }
    }

    /// Build a file from a browser-style `data:<mime>;base64,` URL.
    pub fn from_data_url(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data_url: &str,
    ) -> Result<Self, PipelineError> {
        let name = name.into();
        let payload = data_url_payload(data_url)
            .ok_or_else(|| PipelineError::EmptyFile(name.clone()))?;
        let bytes = from_base64(payload)
            .map_err(|e| PipelineError::UnreadableFile(name.clone(), e.to_string()))?;
        Ok(Self {
            name,
            mime_type: Some(mime_type.into()),
            bytes,
        })
    }

    /// Classify the file content, preferring the reported MIME type and
    /// falling back to the extension and magic-byte sniffing.
    #[must_use]
    pub fn kind(&self) -> Option<FileKind> {
        if let Some(mime) = &self.mime_type {
            let mime = mime.to_ascii_lowercase();
            if mime.starts_with("image/") {
                return Some(FileKind::Image);
            }
            if mime == "application/pdf" {
                return Some(FileKind::Pdf);
            }
            if mime.starts_with("text/") {
                return Some(FileKind::Text);
            }
        }
        if let Some(kind) = kind_from_extension(&self.name) {
            return Some(kind);
        }
        kind_from_content(&self.bytes)
    }
}

fn kind_from_extension(name: &str) -> Option<FileKind> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" => Some(FileKind::Image),
        "pdf" => Some(FileKind::Pdf),
        "txt" | "md" | "markdown" => Some(FileKind::Text),
        _ => None,
    }
}

fn kind_from_content(bytes: &[u8]) -> Option<FileKind> {
    if bytes.starts_with(b"%PDF-") {
        return Some(FileKind::Pdf);
    }
    if bytes.starts_with(b"\x89PNG")
        || bytes.starts_with(b"\xFF\xD8\xFF")
        || bytes.starts_with(b"GIF8")
        || (bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP")
    {
        return Some(FileKind::Image);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(FileKind::Text);
    }
    None
}

/// Turns a chosen file into exactly one analysis request and performs it.
///
/// The raw payload is persisted to the stage store as soon as it is encoded,
/// before the request goes out: a failed analysis can be retried and later
/// stages can replay the payload alongside their own artifacts. The adapter
/// holds no per-call state, so the same file can be resubmitted after any
/// outcome.
pub struct SubmissionAdapter {
    backend: Arc<dyn AnalysisBackend>,
    store: Arc<dyn ArtifactStore>,
}

impl SubmissionAdapter {
    #[must_use]
    pub fn new(backend: Arc<dyn AnalysisBackend>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { backend, store }
    }

    /// Submit a job description (image or plain text) for analysis.
    pub async fn submit_job_description(
        &self,
        file: &UploadedFile,
        user_id: &str,
    ) -> Result<JobAnalysis, PipelineError> {
        let payload = job_description_payload(file)?;
        self.store.put_job_description(&payload)?;
        let request = JobAnalysisRequest {
            job_description: payload,
            user_id: user_id.to_string(),
        };
        Ok(self.backend.analyze_job(request).await?)
    }

    /// Submit a resume PDF for analysis, replaying the stored job
    /// description when one is present.
    pub async fn submit_resume(
        &self,
        file: &UploadedFile,
    ) -> Result<ResumeAnalysis, PipelineError> {
        if file.bytes.is_empty() {
            return Err(PipelineError::EmptyFile(file.name.clone()));
        }
        if file.kind() != Some(FileKind::Pdf) {
            return Err(PipelineError::UnsupportedFile(file.name.clone()));
        }
        let payload = ResumePayload {
            resume: to_base64(&file.bytes),
        };
        self.store.put_resume(&payload)?;
        let request = ResumeAnalysisRequest {
            resume: payload.resume,
            job_description: self.store.get_job_description(),
        };
        Ok(self.backend.analyze_resume(request).await?)
    }
}

fn job_description_payload(file: &UploadedFile) -> Result<JobDescriptionPayload, PipelineError> {
    if file.bytes.is_empty() {
        return Err(PipelineError::EmptyFile(file.name.clone()));
    }
    match file.kind() {
        Some(FileKind::Image) => Ok(JobDescriptionPayload::image(to_base64(&file.bytes))),
        Some(FileKind::Text) => {
            let text = std::str::from_utf8(&file.bytes)
                .map_err(|e| PipelineError::UnreadableFile(file.name.clone(), e.to_string()))?;
            Ok(JobDescriptionPayload::text(text))
        }
        Some(FileKind::Pdf) | None => Err(PipelineError::UnsupportedFile(file.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_wins_over_extension() {
        let file = UploadedFile::new("posting.dat", "image/png", vec![1, 2, 3]);
        assert_eq!(file.kind(), Some(FileKind::Image));
    }

    #[test]
    fn extension_classifies_without_mime() {
        let mut file = UploadedFile::new("notes.md", "application/octet-stream", b"# jd".to_vec());
        file.mime_type = None;
        assert_eq!(file.kind(), Some(FileKind::Text));
    }

    #[test]
    fn magic_bytes_classify_unnamed_content() {
        let mut file = UploadedFile::new("blob", "", b"%PDF-1.7 ...".to_vec());
        file.mime_type = None;
        assert_eq!(file.kind(), Some(FileKind::Pdf));

        let mut file = UploadedFile::new("blob", "", b"\xFF\xD8\xFF\xE0jfif".to_vec());
        file.mime_type = None;
        assert_eq!(file.kind(), Some(FileKind::Image));
    }

    #[test]
    fn binary_garbage_is_unclassified() {
        let mut file = UploadedFile::new("blob", "", vec![0xFF, 0xFE, 0x00, 0x80]);
        file.mime_type = None;
        assert_eq!(file.kind(), None);
    }

    #[test]
    fn data_url_round_trips_into_bytes() {
        let file =
            UploadedFile::from_data_url("shot.png", "image/png", "data:image/png;base64,aGVsbG8=")
                .unwrap();
        assert_eq!(file.bytes, b"hello");
    }
}
