pub mod artifact;
pub mod camera;
pub mod folder;
pub mod keyframe;

pub use artifact::CaptureArtifact;
pub use camera::Camera;
pub use folder::CaptureFolder;
pub use keyframe::Keyframe;
