pub mod instant_ngp;
pub mod instant_ngp_multifile;

use std::str::FromStr;

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::bbox::BBox3D;
use crate::capture::{Camera, CaptureFolder};
use crate::error::{PolyformError, Result};

pub use instant_ngp::InstantNgpConvertor;
pub use instant_ngp_multifile::InstantNgpMultiFileConvertor;

/// Passed through unchanged to the training tool.
pub const AABB_SCALE: u32 = 2;

/// Fraction of the unit cube the largest camera-extent axis is mapped onto.
const EXTENT_FRACTION: f64 = 0.6;

/// Turns a capture folder into files a NeRF trainer can read.
pub trait Convertor {
    fn convert(&self, folder: &CaptureFolder) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Pixels cropped from each border of corrected images, removing the black
    /// strip left by undistortion.
    pub corrected_image_padding: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            corrected_image_padding: 5,
        }
    }
}

/// Scale and offset that map camera positions into the trainer's unit cube,
/// centered on 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub scale: f64,
    pub offset: na::Vector3<f64>,
}

impl Normalization {
    /// `scale = 1 / (max_extent * 0.6)`, `offset = 0.5 - center * scale`.
    ///
    /// A box with no usable extent (e.g. a single camera) keeps `scale = 1`.
    pub fn from_bbox(bbox: &BBox3D) -> Normalization {
        let max_size = bbox.max_extent() * EXTENT_FRACTION;
        let scale = if max_size.is_finite() && max_size > 0.0 {
            1.0 / max_size
        } else {
            log::warn!(
                "Camera positions span no volume (max extent {}), using unit scale",
                bbox.max_extent()
            );
            1.0
        };
        let offset = -bbox.center() * scale + na::Vector3::repeat(0.5);
        Normalization { scale, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    pub fl_x: f64,
    pub fl_y: f64,
    pub cx: f64,
    pub cy: f64,
    pub w: u32,
    pub h: u32,
}

impl Intrinsics {
    pub fn from_camera(cam: &Camera) -> Intrinsics {
        Intrinsics {
            fl_x: cam.fx,
            fl_y: cam.fy,
            cx: cam.cx,
            cy: cam.cy,
            w: cam.width,
            h: cam.height,
        }
    }

    /// Intrinsics of the image after removing `padding` pixels from every border.
    pub fn cropped(&self, padding: u32) -> Intrinsics {
        Intrinsics {
            cx: self.cx - padding as f64,
            cy: self.cy - padding as f64,
            w: self.w.saturating_sub(2 * padding),
            h: self.h.saturating_sub(2 * padding),
            ..*self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerfFrame {
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f64>,
    pub transform_matrix: [[f64; 4]; 4],
}

/// An instant-ngp style `transforms.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerfTransforms {
    #[serde(flatten)]
    pub intrinsics: Intrinsics,
    pub scale: f64,
    pub offset: [f64; 3],
    pub aabb_scale: u32,
    pub frames: Vec<NerfFrame>,
}

impl NerfTransforms {
    pub fn new(intrinsics: Intrinsics, norm: &Normalization, frames: Vec<NerfFrame>) -> Self {
        NerfTransforms {
            intrinsics,
            scale: norm.scale,
            offset: [norm.offset.x, norm.offset.y, norm.offset.z],
            aabb_scale: AABB_SCALE,
            frames,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    InstantNgp,
    InstantNgpMultiFile,
}

impl FromStr for OutputFormat {
    type Err = PolyformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ingp" | "instant-ngp" => Ok(OutputFormat::InstantNgp),
            "ingp-multifile" => Ok(OutputFormat::InstantNgpMultiFile),
            _ => Err(PolyformError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn convertor(&self, config: ConvertConfig) -> Box<dyn Convertor> {
        match self {
            OutputFormat::InstantNgp => Box::new(InstantNgpConvertor::new(config)),
            OutputFormat::InstantNgpMultiFile => Box::new(InstantNgpMultiFileConvertor),
        }
    }
}
