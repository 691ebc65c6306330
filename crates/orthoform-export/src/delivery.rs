use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, ExportError};

/// An encoded document ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Host-side reference to an artifact (an object URL, a temp file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactHandle(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Opened in a new viewing context.
    Viewed,
    /// Saved through the download fallback.
    Downloaded,
}

/// The environment an exported document is delivered into.
pub trait Host {
    /// Make the artifact addressable so it can be opened.
    fn create_handle(&mut self, artifact: &Artifact) -> Result<ArtifactHandle, DeliveryError>;

    /// Open the artifact in a new viewing context.
    fn open(&mut self, handle: &ArtifactHandle) -> Result<(), DeliveryError>;

    /// Save the artifact under its own filename.
    fn download(&mut self, artifact: &Artifact) -> Result<(), DeliveryError>;

    /// Reclaim a handle once `delay` has passed. Best effort.
    fn release_after(&mut self, handle: ArtifactHandle, delay: Duration);
}

/// Hand an artifact to the host: view it if possible, download otherwise.
///
/// Order of attempts: create a handle and open it; if the host refuses to
/// open, download instead; if no handle can be created at all, download
/// directly. A created handle is always scheduled for release, whichever
/// path was taken.
pub fn deliver<H: Host + ?Sized>(
    host: &mut H,
    artifact: &Artifact,
    release_delay: Duration,
) -> Result<DeliveryOutcome, ExportError> {
    if artifact.bytes.is_empty() {
        return Err(ExportError::EmptyArtifact);
    }

    let handle = match host.create_handle(artifact) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(error = %e, filename = %artifact.filename, "falling back to download");
            host.download(artifact)?;
            tracing::info!(filename = %artifact.filename, "document downloaded");
            return Ok(DeliveryOutcome::Downloaded);
        }
    };

    let result = match host.open(&handle) {
        Ok(()) => Ok(DeliveryOutcome::Viewed),
        Err(e) => {
            tracing::warn!(error = %e, filename = %artifact.filename, "viewer refused, downloading");
            host.download(artifact).map(|()| DeliveryOutcome::Downloaded)
        }
    };

    host.release_after(handle, release_delay);

    let outcome = result?;
    tracing::info!(filename = %artifact.filename, ?outcome, "document delivered");
    Ok(outcome)
}
