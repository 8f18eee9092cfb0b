/// Files and sub-directories a capture folder may contain, relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureArtifact {
    Images,
    CorrectedImages,
    Cameras,
    CorrectedCameras,
    DepthMaps,
    ConfidenceMaps,
    MeshInfo,
    Anchors,
    PreviewMesh,
}

impl CaptureArtifact {
    pub const ALL: [CaptureArtifact; 9] = [
        CaptureArtifact::Images,
        CaptureArtifact::CorrectedImages,
        CaptureArtifact::Cameras,
        CaptureArtifact::CorrectedCameras,
        CaptureArtifact::DepthMaps,
        CaptureArtifact::ConfidenceMaps,
        CaptureArtifact::MeshInfo,
        CaptureArtifact::Anchors,
        CaptureArtifact::PreviewMesh,
    ];

    pub const fn relative_path(&self) -> &'static str {
        match self {
            CaptureArtifact::Images => "keyframes/images",
            CaptureArtifact::CorrectedImages => "keyframes/corrected_images",
            CaptureArtifact::Cameras => "keyframes/cameras",
            CaptureArtifact::CorrectedCameras => "keyframes/corrected_cameras",
            CaptureArtifact::DepthMaps => "keyframes/depth",
            CaptureArtifact::ConfidenceMaps => "keyframes/confidence",
            CaptureArtifact::MeshInfo => "mesh_info.json",
            CaptureArtifact::Anchors => "anchors.json",
            CaptureArtifact::PreviewMesh => "mesh.obj",
        }
    }
}

impl std::fmt::Display for CaptureArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.relative_path())
    }
}
