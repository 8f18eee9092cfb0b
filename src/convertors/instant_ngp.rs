use std::path::Path;

use indicatif::ProgressIterator;

use super::{ConvertConfig, Convertor, Intrinsics, NerfFrame, NerfTransforms, Normalization};
use crate::capture::{CaptureArtifact, CaptureFolder, Keyframe};
use crate::error::Result;
use crate::io::object_to_json;

pub const TRANSFORMS_FILE: &str = "transforms.json";

/// Writes a single `transforms.json` at the capture folder root.
///
/// Intrinsics are taken from the first emitted keyframe and assumed constant
/// for the whole capture. They do drift by a pixel or two between frames; use
/// [`super::InstantNgpMultiFileConvertor`] when per-frame intrinsics matter.
#[derive(Debug, Clone, Default)]
pub struct InstantNgpConvertor {
    config: ConvertConfig,
}

impl InstantNgpConvertor {
    pub fn new(config: ConvertConfig) -> InstantNgpConvertor {
        InstantNgpConvertor { config }
    }

    fn convert_keyframe(&self, keyframe: &Keyframe, crop: bool) -> Result<NerfFrame> {
        let file_path = if crop {
            let artifact = CaptureArtifact::CorrectedImages;
            let crop_name = format!("{}_crop.jpg", keyframe.name);
            let crop_path = keyframe
                .folder
                .join(artifact.relative_path())
                .join(&crop_name);
            crop_corrected_image(
                &keyframe.corrected_image_path,
                &crop_path,
                self.config.corrected_image_padding,
                keyframe.camera.width,
                keyframe.camera.height,
            )?;
            format!("./{}/{}", artifact, crop_name)
        } else {
            format!("./{}/{}.jpg", CaptureArtifact::Images, keyframe.name)
        };
        Ok(NerfFrame {
            file_path,
            sharpness: keyframe.camera.sharpness(),
            transform_matrix: keyframe.camera.transform_rows(),
        })
    }
}

/// Removes `padding` pixels from every border of `src` and saves the result to `dst`.
///
/// Corrected images carry a black strip from undistortion that NeRF trainers
/// do not mask out. The rectangle is `(x, y, width, height)` =
/// `(padding, padding, width - 2 * padding, height - 2 * padding)`, not a
/// `(left, top, right, bottom)` box, so the result matches [`Intrinsics::cropped`].
pub fn crop_corrected_image(
    src: &Path,
    dst: &Path,
    padding: u32,
    width: u32,
    height: u32,
) -> Result<()> {
    let img = image::ImageReader::open(src)?.decode()?;
    let cropped = img.crop_imm(
        padding,
        padding,
        width.saturating_sub(2 * padding),
        height.saturating_sub(2 * padding),
    );
    cropped.save(dst)?;
    Ok(())
}

impl Convertor for InstantNgpConvertor {
    fn convert(&self, folder: &CaptureFolder) -> Result<()> {
        let mut keyframes = folder.get_keyframes()?;
        // Optimized captures are emitted as cropped corrected images only. A frame
        // without its own corrected pose would not match the cropped intrinsics.
        let optimized = folder.has_optimized_poses();
        if optimized {
            keyframes.retain(|keyframe| {
                let keep = keyframe.is_optimized();
                if !keep {
                    log::warn!("{} has no corrected pose, skipping it", keyframe);
                }
                keep
            });
        }
        let Some(bbox) = CaptureFolder::camera_bbox(&keyframes) else {
            log::error!(
                "Capture folder {} does not have any data! Aborting conversion to Instant NGP",
                folder.id
            );
            return Ok(());
        };
        log::debug!("camera bbox\n{}", bbox);
        let norm = Normalization::from_bbox(&bbox);

        let mut intrinsics = Intrinsics::from_camera(&keyframes[0].camera);
        if optimized {
            intrinsics = intrinsics.cropped(self.config.corrected_image_padding);
        }

        let frames = keyframes
            .iter()
            .progress()
            .map(|keyframe| self.convert_keyframe(keyframe, optimized))
            .collect::<Result<Vec<_>>>()?;

        let output_file_path = folder.root.join(TRANSFORMS_FILE);
        object_to_json(&output_file_path, &NerfTransforms::new(intrinsics, &norm, frames))?;
        log::info!(
            "Successfully wrote the data to {}",
            output_file_path.display()
        );
        Ok(())
    }
}
