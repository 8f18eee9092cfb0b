use std::path::{Path, PathBuf};

use glob::{Pattern, glob};

use super::artifact::CaptureArtifact;
use super::keyframe::Keyframe;
use crate::bbox::{BBox3D, bbox_from_points};
use crate::error::{PolyformError, Result};

/// A capture session directory as exported by the scanning app.
///
/// Everything is read from the filesystem on demand; the folder itself holds
/// only its root path.
#[derive(Debug, Clone)]
pub struct CaptureFolder {
    pub root: PathBuf,
    pub id: String,
}

impl CaptureFolder {
    pub fn new(root: impl Into<PathBuf>) -> CaptureFolder {
        let root: PathBuf = root.into();
        let id = root
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();
        let folder = CaptureFolder { root, id };
        if !folder.has_optimized_poses() {
            log::warn!(
                "Camera poses have not been optimized, the raw device poses will be used as a fallback"
            );
        }
        folder
    }

    pub fn get_artifact_path(&self, artifact: CaptureArtifact) -> PathBuf {
        self.root.join(artifact.relative_path())
    }

    pub fn has_artifact(&self, artifact: CaptureArtifact) -> bool {
        self.get_artifact_path(artifact).exists()
    }

    /// Folder-level check; individual keyframes may still lack corrected data.
    pub fn has_optimized_poses(&self) -> bool {
        self.has_artifact(CaptureArtifact::CorrectedCameras)
            && self.has_artifact(CaptureArtifact::CorrectedImages)
    }

    /// Files inside a directory artifact with the given extension, sorted by name.
    ///
    /// A missing directory yields an empty list.
    pub fn get_artifact_paths(
        &self,
        folder_artifact: CaptureArtifact,
        file_extension: &str,
    ) -> Result<Vec<PathBuf>> {
        let folder_path = self.get_artifact_path(folder_artifact);
        if !folder_path.is_dir() {
            return Ok(Vec::new());
        }
        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&folder_path.to_string_lossy()),
            Pattern::escape(file_extension)
        );
        let mut paths: Vec<PathBuf> = glob(&pattern)?.filter_map(|p| p.ok()).collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    pub fn get_image_paths(&self) -> Result<Vec<PathBuf>> {
        self.get_artifact_paths(CaptureArtifact::Images, "jpg")
    }

    pub fn get_camera_paths(&self) -> Result<Vec<PathBuf>> {
        self.get_artifact_paths(CaptureArtifact::Cameras, "json")
    }

    pub fn get_depth_paths(&self) -> Result<Vec<PathBuf>> {
        self.get_artifact_paths(CaptureArtifact::DepthMaps, "png")
    }

    /// File stems of every camera record, sorted as strings.
    pub fn get_keyframe_names(&self) -> Result<Vec<String>> {
        Ok(self
            .get_camera_paths()?
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect())
    }

    /// Timestamps of every camera record, in file-name order.
    ///
    /// Names are sorted as strings before being parsed, so `9.json` comes after
    /// `10.json`. Equal-width names sort numerically.
    pub fn get_keyframe_timestamps(&self) -> Result<Vec<i64>> {
        self.get_keyframe_names()?
            .iter()
            .map(|name| {
                name.parse()
                    .map_err(|_| PolyformError::InvalidTimestamp(name.clone()))
            })
            .collect()
    }

    /// All keyframes passing [`Keyframe::is_valid`]; invalid ones are dropped.
    pub fn get_keyframes(&self) -> Result<Vec<Keyframe>> {
        let mut keyframes = Vec::new();
        for name in self.get_keyframe_names()? {
            let keyframe = Keyframe::from_name(&self.root, &name)?;
            if keyframe.is_valid() {
                keyframes.push(keyframe);
            } else {
                log::trace!("dropping invalid {}", keyframe);
            }
        }
        log::info!("{}: {} valid keyframes", self.id, keyframes.len());
        Ok(keyframes)
    }

    /// Box around the camera positions, `None` if there are no keyframes.
    pub fn camera_bbox(keyframes: &[Keyframe]) -> Option<BBox3D> {
        bbox_from_points(keyframes.iter().map(|k| k.camera.position()))
    }

    /// Lenient JSON read, see [`crate::io::load_json`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<serde_json::Map<String, serde_json::Value>> {
        crate::io::load_json(path)
    }

    pub fn load_json_artifact(
        &self,
        artifact: CaptureArtifact,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        CaptureFolder::load_json(self.get_artifact_path(artifact))
    }
}
