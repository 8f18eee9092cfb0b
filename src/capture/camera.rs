use nalgebra as na;
use serde::{Deserialize, Deserializer};

/// Pinhole intrinsics plus the camera-to-world pose of one keyframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    pub width: u32,
    pub height: u32,
    pub blur_score: Option<f64>,
    pub transform: na::Matrix4<f64>,
}

/// Camera record as written by the capture app, one file per keyframe.
#[derive(Debug, Deserialize)]
struct CameraRecord {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    #[serde(deserialize_with = "integral")]
    width: u32,
    #[serde(deserialize_with = "integral")]
    height: u32,
    #[serde(deserialize_with = "nullable")]
    blur_score: Option<f64>,
    t_00: f64,
    t_01: f64,
    t_02: f64,
    t_03: f64,
    t_10: f64,
    t_11: f64,
    t_12: f64,
    t_13: f64,
    t_20: f64,
    t_21: f64,
    t_22: f64,
    t_23: f64,
}

// Some exporters write image dimensions as floats, e.g. `1920.0`.
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            value
        )));
    }
    Ok(value as u32)
}

// Key must be present, but the value may be null.
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<f64>::deserialize(deserializer)
}

impl From<CameraRecord> for Camera {
    fn from(r: CameraRecord) -> Self {
        #[rustfmt::skip]
        let transform = na::Matrix4::new(
            r.t_00, r.t_01, r.t_02, r.t_03,
            r.t_10, r.t_11, r.t_12, r.t_13,
            r.t_20, r.t_21, r.t_22, r.t_23,
            0.0, 0.0, 0.0, 1.0,
        );
        Camera {
            fx: r.fx,
            fy: r.fy,
            cx: r.cx,
            cy: r.cy,
            width: r.width,
            height: r.height,
            blur_score: r.blur_score,
            transform,
        }
    }
}

impl Camera {
    /// Parses a camera record. Every key is required; a missing one is an error.
    pub fn from_json(value: &serde_json::Value) -> Result<Camera, serde_json::Error> {
        CameraRecord::deserialize(value).map(Camera::from)
    }

    /// Camera center in world coordinates.
    pub fn position(&self) -> na::Vector3<f64> {
        self.transform.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// The 4x4 pose as nested rows.
    pub fn transform_rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.transform[(r, c)];
            }
        }
        rows
    }

    /// Blur score when it carries information (present and non-zero).
    pub fn sharpness(&self) -> Option<f64> {
        self.blur_score.filter(|s| *s != 0.0 && !s.is_nan())
    }
}
