use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, SystemTime};

use orthoform_export::delivery::{Artifact, ArtifactHandle, Host};
use orthoform_export::error::DeliveryError;

/// Staged copies older than this are swept when a new one is staged.
pub const STAGED_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Delivers exports on the local machine.
///
/// Viewing writes a staging copy and hands it to the platform opener;
/// downloading writes the document into the output directory under its
/// fixed name.
pub struct LocalHost {
    output_dir: PathBuf,
    staging_dir: PathBuf,
    open_in_viewer: bool,
    viewer: Option<OsString>,
    pending: Vec<JoinHandle<()>>,
}

impl LocalHost {
    pub fn new(output_dir: impl Into<PathBuf>, open_in_viewer: bool) -> Self {
        Self::with_staging_dir(
            output_dir,
            std::env::temp_dir().join("orthoform"),
            open_in_viewer,
        )
    }

    pub fn with_staging_dir(
        output_dir: impl Into<PathBuf>,
        staging_dir: impl Into<PathBuf>,
        open_in_viewer: bool,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            staging_dir: staging_dir.into(),
            open_in_viewer,
            viewer: None,
            pending: Vec::new(),
        }
    }

    /// Open documents with `program` instead of the platform opener.
    pub fn with_viewer(mut self, program: impl Into<OsString>) -> Self {
        self.viewer = Some(program.into());
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Block until every scheduled release has run.
    pub fn wait_for_releases(&mut self) {
        for handle in self.pending.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("release thread panicked");
            }
        }
    }
}

fn platform_opener() -> Command {
    if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    }
}

/// Remove staged copies left behind by earlier runs whose release never
/// happened.
fn sweep_stale(staging_dir: &Path, max_age: Duration) {
    let Ok(entries) = std::fs::read_dir(staging_dir) else {
        return;
    };
    let now = SystemTime::now();
    for entry in entries.flatten() {
        let path = entry.path();
        let stale = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .is_some_and(|age| age > max_age);
        if stale && path.is_file() {
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "swept stale staged document"),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "sweep skipped"),
            }
        }
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension("part");
    std::fs::write(&tmp_path, bytes)?;
    std::fs::rename(&tmp_path, path)
}

impl Host for LocalHost {
    fn create_handle(&mut self, artifact: &Artifact) -> Result<ArtifactHandle, DeliveryError> {
        std::fs::create_dir_all(&self.staging_dir)
            .map_err(|e| DeliveryError::Handle(e.to_string()))?;
        sweep_stale(&self.staging_dir, STAGED_MAX_AGE);

        let path = self
            .staging_dir
            .join(format!("{}-{}", uuid::Uuid::new_v4(), artifact.filename));
        write_atomically(&path, &artifact.bytes).map_err(|e| DeliveryError::Handle(e.to_string()))?;

        tracing::debug!(path = %path.display(), "staged document for viewing");
        Ok(ArtifactHandle(path.display().to_string()))
    }

    fn open(&mut self, handle: &ArtifactHandle) -> Result<(), DeliveryError> {
        if !self.open_in_viewer {
            return Err(DeliveryError::Refused("viewer disabled".to_string()));
        }

        let mut command = match &self.viewer {
            Some(program) => Command::new(program),
            None => platform_opener(),
        };
        // Platform openers exit once the viewer has the file.
        let status = command
            .arg(&handle.0)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| DeliveryError::Refused(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(DeliveryError::Refused(format!("viewer exited with {status}")))
        }
    }

    fn download(&mut self, artifact: &Artifact) -> Result<(), DeliveryError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| DeliveryError::Download(e.to_string()))?;

        let path = self.output_dir.join(&artifact.filename);
        write_atomically(&path, &artifact.bytes)
            .map_err(|e| DeliveryError::Download(e.to_string()))?;

        tracing::info!(path = %path.display(), "document saved");
        Ok(())
    }

    fn release_after(&mut self, handle: ArtifactHandle, delay: Duration) {
        let path = PathBuf::from(handle.0);
        self.pending.push(std::thread::spawn(move || {
            std::thread::sleep(delay);
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "released staged document"),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "release skipped"),
            }
        }));
    }
}
