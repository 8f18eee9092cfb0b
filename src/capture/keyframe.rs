use std::fmt;
use std::path::{Path, PathBuf};

use super::artifact::CaptureArtifact;
use super::camera::Camera;
use crate::error::{PolyformError, Result};

/// One timestamped frame: its camera plus the paths of its per-frame artifacts.
///
/// The camera is resolved once, when the keyframe is created. Later changes to
/// the files on disk are not reflected in `camera`.
#[derive(Debug, Clone)]
pub struct Keyframe {
    pub folder: PathBuf,
    pub timestamp: i64,
    /// File stem shared by the frame's artifacts, e.g. `000120` for a zero-padded capture.
    pub name: String,
    pub image_path: PathBuf,
    pub corrected_image_path: PathBuf,
    pub camera_path: PathBuf,
    pub corrected_camera_path: PathBuf,
    pub depth_path: PathBuf,
    pub camera: Camera,
}

fn artifact_file(folder: &Path, artifact: CaptureArtifact, name: &str, ext: &str) -> PathBuf {
    folder
        .join(artifact.relative_path())
        .join(format!("{}.{}", name, ext))
}

impl Keyframe {
    /// Builds the keyframe and parses its best camera record.
    ///
    /// The corrected camera is used only when both the corrected camera record
    /// and the corrected image exist; otherwise the raw camera record is read.
    pub fn new(folder: impl AsRef<Path>, timestamp: i64) -> Result<Keyframe> {
        Keyframe::from_name(folder, &timestamp.to_string())
    }

    /// Like [`Keyframe::new`], but keeps the artifact file stem as found on disk,
    /// so zero-padded names such as `0001` resolve to `0001.json`.
    pub fn from_name(folder: impl AsRef<Path>, name: &str) -> Result<Keyframe> {
        let folder = folder.as_ref();
        let timestamp: i64 = name
            .parse()
            .map_err(|_| PolyformError::InvalidTimestamp(name.to_string()))?;
        let image_path = artifact_file(folder, CaptureArtifact::Images, name, "jpg");
        let corrected_image_path =
            artifact_file(folder, CaptureArtifact::CorrectedImages, name, "jpg");
        let camera_path = artifact_file(folder, CaptureArtifact::Cameras, name, "json");
        let corrected_camera_path =
            artifact_file(folder, CaptureArtifact::CorrectedCameras, name, "json");
        let depth_path = artifact_file(folder, CaptureArtifact::DepthMaps, name, "png");

        let best_camera_path = if corrected_camera_path.is_file() && corrected_image_path.is_file()
        {
            &corrected_camera_path
        } else {
            &camera_path
        };
        log::trace!(
            "keyframe:{} using camera {}",
            timestamp,
            best_camera_path.display()
        );
        let camera = read_camera(best_camera_path)?;

        Ok(Keyframe {
            folder: folder.to_path_buf(),
            timestamp,
            name: name.to_string(),
            image_path,
            corrected_image_path,
            camera_path,
            corrected_camera_path,
            depth_path,
            camera,
        })
    }

    /// Raw camera record, raw image and depth map all exist.
    ///
    /// Only the raw artifacts are checked, even when `camera` came from the
    /// corrected record.
    pub fn is_valid(&self) -> bool {
        self.camera_path.is_file() && self.image_path.is_file() && self.depth_path.is_file()
    }

    /// Corrected camera record and corrected image both exist.
    pub fn is_optimized(&self) -> bool {
        self.corrected_camera_path.is_file() && self.corrected_image_path.is_file()
    }

    /// Artifact directory holding the image that matches `camera`.
    pub fn image_artifact(&self) -> CaptureArtifact {
        if self.is_optimized() {
            CaptureArtifact::CorrectedImages
        } else {
            CaptureArtifact::Images
        }
    }
}

fn read_camera(path: &Path) -> Result<Camera> {
    let contents = std::fs::read_to_string(path).map_err(|source| PolyformError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    Camera::from_json(&value).map_err(|source| PolyformError::InvalidCamera {
        path: path.to_path_buf(),
        source,
    })
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keyframe:{}", self.timestamp)
    }
}
