use indicatif::ProgressIterator;

use super::{Convertor, Intrinsics, NerfFrame, NerfTransforms, Normalization};
use crate::capture::{CaptureFolder, Keyframe};
use crate::error::Result;
use crate::io::object_to_json;

/// Writes one `{timestamp}.json` per keyframe (named after the camera file
/// stem) so the trainer can use per-frame intrinsics. Images are referenced
/// as-is, without cropping.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantNgpMultiFileConvertor;

impl InstantNgpMultiFileConvertor {
    fn convert_keyframe(keyframe: &Keyframe) -> NerfFrame {
        NerfFrame {
            file_path: format!("./{}/{}.jpg", keyframe.image_artifact(), keyframe.name),
            sharpness: keyframe.camera.sharpness(),
            transform_matrix: keyframe.camera.transform_rows(),
        }
    }
}

impl Convertor for InstantNgpMultiFileConvertor {
    fn convert(&self, folder: &CaptureFolder) -> Result<()> {
        let keyframes = folder.get_keyframes()?;
        let Some(bbox) = CaptureFolder::camera_bbox(&keyframes) else {
            log::error!(
                "Capture folder {} does not have any data! Aborting conversion to Instant NGP",
                folder.id
            );
            return Ok(());
        };
        log::debug!("camera bbox\n{}", bbox);
        let norm = Normalization::from_bbox(&bbox);

        for keyframe in keyframes.iter().progress() {
            let data = NerfTransforms::new(
                Intrinsics::from_camera(&keyframe.camera),
                &norm,
                vec![Self::convert_keyframe(keyframe)],
            );
            let output_file_path = folder.root.join(format!("{}.json", keyframe.name));
            object_to_json(&output_file_path, &data)?;
            log::trace!("wrote {}", output_file_path.display());
        }
        log::info!("Successfully wrote {} camera files", keyframes.len());
        Ok(())
    }
}
