use std::fmt;

use nalgebra as na;

/// Axis-aligned 3D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox3D {
    pub min: na::Vector3<f64>,
    pub max: na::Vector3<f64>,
}

impl BBox3D {
    /// Creates a box from its corners, rejecting corners with `min > max` on any axis.
    pub fn new(min: na::Vector3<f64>, max: na::Vector3<f64>) -> Option<BBox3D> {
        let bbox = BBox3D { min, max };
        bbox.is_valid().then_some(bbox)
    }

    pub fn is_valid(&self) -> bool {
        self.min.iter().zip(self.max.iter()).all(|(lo, hi)| lo <= hi)
    }

    pub fn center(&self) -> na::Vector3<f64> {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> na::Vector3<f64> {
        self.max - self.min
    }

    /// Largest edge length of the box.
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    pub fn contains(&self, point: &na::Vector3<f64>) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }
}

impl fmt::Display for BBox3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let center = self.center();
        writeln!(f, "*** BBox3D ***")?;
        writeln!(f, "min: [{}, {}, {}]", self.min.x, self.min.y, self.min.z)?;
        writeln!(f, "max: [{}, {}, {}]", self.max.x, self.max.y, self.max.z)?;
        writeln!(f, "size: [{}, {}, {}]", size.x, size.y, size.z)?;
        write!(f, "center: [{}, {}, {}]", center.x, center.y, center.z)
    }
}

/// Computes the tightest box containing every point.
///
/// The running bounds start at the largest finite `f64` magnitudes rather than
/// infinities. Returns `None` when `points` is empty.
pub fn bbox_from_points<I>(points: I) -> Option<BBox3D>
where
    I: IntoIterator<Item = na::Vector3<f64>>,
{
    let mut bbox_min = na::Vector3::repeat(f64::MAX);
    let mut bbox_max = na::Vector3::repeat(f64::MIN);
    let mut count = 0usize;
    for point in points {
        for axis in 0..3 {
            bbox_min[axis] = bbox_min[axis].min(point[axis]);
            bbox_max[axis] = bbox_max[axis].max(point[axis]);
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(BBox3D {
        min: bbox_min,
        max: bbox_max,
    })
}
