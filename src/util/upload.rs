//! Client side of the file-upload service: per-slot limits, selection
//! validation, and the multipart POST.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload service stores files and answers with their public URLs. The
//! portal only validates what the user picked and forwards the files to the
//! slot's route; the URLs are then attached to events or the scrapbook.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

const MIB: u64 = 1024 * 1024;

/// Upload routes exposed by the upload service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadSlot {
    EventThumbnail,
    EventImages,
    Scrapbook,
}

impl UploadSlot {
    /// Route name on the upload service.
    pub fn route(self) -> &'static str {
        match self {
            Self::EventThumbnail => "eventThumbnail",
            Self::EventImages => "eventImages",
            Self::Scrapbook => "testUploader",
        }
    }

    pub fn max_file_bytes(self) -> u64 {
        match self {
            Self::EventThumbnail => 2 * MIB,
            Self::EventImages | Self::Scrapbook => 4 * MIB,
        }
    }

    pub fn max_file_count(self) -> usize {
        match self {
            Self::EventThumbnail => 1,
            Self::EventImages | Self::Scrapbook => 5,
        }
    }

    pub fn accepts_multiple(self) -> bool {
        self.max_file_count() > 1
    }
}

/// Metadata of a picked file, independent of the browser `File` type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No file selected")]
    Empty,
    #[error("Too many files: at most {max} allowed")]
    TooMany { max: usize },
    #[error("{name} is larger than {max_mb} MB")]
    TooLarge { name: String, max_mb: u64 },
    #[error("{name} is not an image")]
    NotImage { name: String },
    #[error("Upload failed: {0}")]
    Transport(String),
}

/// Check a selection against the slot's limits before anything is sent.
///
/// # Errors
///
/// Returns the first violated limit.
pub fn validate_selection(slot: UploadSlot, files: &[SelectedFile]) -> Result<(), UploadError> {
    if files.is_empty() {
        return Err(UploadError::Empty);
    }
    if files.len() > slot.max_file_count() {
        return Err(UploadError::TooMany { max: slot.max_file_count() });
    }
    for file in files {
        if !file.mime.starts_with("image/") {
            return Err(UploadError::NotImage { name: file.name.clone() });
        }
        if file.size > slot.max_file_bytes() {
            return Err(UploadError::TooLarge { name: file.name.clone(), max_mb: slot.max_file_bytes() / MIB });
        }
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn slot_url(base: &str, slot: UploadSlot) -> String {
    format!("{base}/{}", slot.route())
}

/// Read the files currently picked in an `<input type="file">`.
#[cfg(feature = "hydrate")]
pub fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn describe(file: &web_sys::File) -> SelectedFile {
    SelectedFile { name: file.name(), size: file.size() as u64, mime: file.type_() }
}

/// Validate and upload `files` to `slot`, returning the stored URLs in order.
///
/// # Errors
///
/// Returns a validation error before sending, or `UploadError::Transport`
/// when the upload service fails.
#[cfg(feature = "hydrate")]
pub async fn upload_files(
    cfg: &crate::config::ApiConfig,
    slot: UploadSlot,
    files: &[web_sys::File],
) -> Result<Vec<String>, UploadError> {
    use crate::net::types::UploadedFile;

    let described: Vec<SelectedFile> = files.iter().map(describe).collect();
    validate_selection(slot, &described)?;

    let form = web_sys::FormData::new().map_err(|_| UploadError::Transport("form data unavailable".to_owned()))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|_| UploadError::Transport(format!("could not attach {}", file.name())))?;
    }

    let resp = gloo_net::http::Request::post(&slot_url(&cfg.upload_base_url, slot))
        .body(form)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    let uploaded: Vec<UploadedFile> = crate::net::api::http::read_json(resp)
        .await
        .map_err(|e| UploadError::Transport(e.user_message(&e.to_string())))?;
    log::info!("uploaded {} file(s) to {}", uploaded.len(), slot.route());
    Ok(uploaded.into_iter().map(|f| f.url).collect())
}
