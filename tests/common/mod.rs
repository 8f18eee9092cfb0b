#![allow(dead_code)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

pub const WIDTH: u32 = 40;
pub const HEIGHT: u32 = 30;

pub fn camera_record(fx: f64, position: [f64; 3], blur_score: Option<f64>) -> serde_json::Value {
    json!({
        "fx": fx, "fy": fx, "cx": WIDTH as f64 / 2.0, "cy": HEIGHT as f64 / 2.0,
        "width": WIDTH, "height": HEIGHT, "blur_score": blur_score,
        "t_00": 1.0, "t_01": 0.0, "t_02": 0.0, "t_03": position[0],
        "t_10": 0.0, "t_11": 1.0, "t_12": 0.0, "t_13": position[1],
        "t_20": 0.0, "t_21": 0.0, "t_22": 1.0, "t_23": position[2]
    })
}

/// Synthetic capture folder rooted in a temp directory.
pub struct CaptureBuilder {
    pub dir: TempDir,
}

impl CaptureBuilder {
    pub fn new() -> CaptureBuilder {
        CaptureBuilder {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    fn file(&self, sub: &str, name: String) -> PathBuf {
        let folder = self.dir.path().join(sub);
        fs::create_dir_all(&folder).unwrap();
        folder.join(name)
    }

    pub fn camera(&self, ts: impl Display + Copy, record: &serde_json::Value) -> &Self {
        let path = self.file("keyframes/cameras", format!("{}.json", ts));
        fs::write(path, record.to_string()).unwrap();
        self
    }

    pub fn corrected_camera(
        &self,
        ts: impl Display + Copy,
        record: &serde_json::Value,
    ) -> &Self {
        let path = self.file("keyframes/corrected_cameras", format!("{}.json", ts));
        fs::write(path, record.to_string()).unwrap();
        self
    }

    pub fn image(&self, ts: impl Display + Copy) -> &Self {
        write_jpg(&self.file("keyframes/images", format!("{}.jpg", ts)));
        self
    }

    pub fn corrected_image(&self, ts: impl Display + Copy) -> &Self {
        write_jpg(&self.file("keyframes/corrected_images", format!("{}.jpg", ts)));
        self
    }

    pub fn depth(&self, ts: impl Display + Copy) -> &Self {
        let path = self.file("keyframes/depth", format!("{}.png", ts));
        image::GrayImage::new(4, 4).save(path).unwrap();
        self
    }

    /// Raw camera, image and depth map: a valid keyframe.
    pub fn raw_keyframe(&self, ts: impl Display + Copy, record: &serde_json::Value) -> &Self {
        self.camera(ts, record).image(ts).depth(ts)
    }

    pub fn optimized_keyframe(
        &self,
        ts: impl Display + Copy,
        raw: &serde_json::Value,
        corrected: &serde_json::Value,
    ) -> &Self {
        self.raw_keyframe(ts, raw)
            .corrected_camera(ts, corrected)
            .corrected_image(ts)
    }
}

pub fn write_jpg(path: &Path) {
    image::RgbImage::from_pixel(WIDTH, HEIGHT, image::Rgb([120, 64, 200]))
        .save(path)
        .unwrap();
}
