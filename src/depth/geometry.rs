//! Fixed frame geometry established once at startup.
use super::sample::ColorPoint;
use crate::error::SpotlightError;
use serde::Serialize;

/// Depth and colour resolutions plus the derived colour-to-depth divisor.
///
/// Construction validates the geometry so per-pixel loops never run on a
/// zero divisor or on a depth frame that cannot be addressed inside the
/// colour-resolution buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameGeometry {
    depth_width: usize,
    depth_height: usize,
    color_width: usize,
    color_height: usize,
    divisor: usize,
}

impl FrameGeometry {
    pub fn new(
        depth_width: usize,
        depth_height: usize,
        color_width: usize,
        color_height: usize,
    ) -> Result<Self, SpotlightError> {
        if depth_width == 0 || depth_height == 0 || color_width == 0 || color_height == 0 {
            return Err(SpotlightError::EmptyFrame {
                depth_width,
                depth_height,
                color_width,
                color_height,
            });
        }
        let divisor = color_width / depth_width;
        if divisor == 0 {
            return Err(SpotlightError::ZeroDivisor {
                color_width,
                depth_width,
            });
        }
        if depth_height > color_height {
            return Err(SpotlightError::DepthExceedsColor {
                depth_width,
                depth_height,
                color_width,
                color_height,
            });
        }
        Ok(Self {
            depth_width,
            depth_height,
            color_width,
            color_height,
            divisor,
        })
    }

    pub fn depth_width(&self) -> usize {
        self.depth_width
    }

    pub fn depth_height(&self) -> usize {
        self.depth_height
    }

    pub fn color_width(&self) -> usize {
        self.color_width
    }

    pub fn color_height(&self) -> usize {
        self.color_height
    }

    /// `color_width / depth_width`, always >= 1.
    pub fn divisor(&self) -> usize {
        self.divisor
    }

    pub fn depth_len(&self) -> usize {
        self.depth_width * self.depth_height
    }

    pub fn color_len(&self) -> usize {
        self.color_width * self.color_height
    }

    /// Calibration-free depth → colour map: depth pixel `(x, y)` maps to
    /// colour pixel `(x * divisor, y * divisor)`.
    pub fn fill_scaled_map(&self, out: &mut Vec<ColorPoint>) {
        out.clear();
        out.reserve(self.depth_len());
        let d = self.divisor as i32;
        for y in 0..self.depth_height as i32 {
            for x in 0..self.depth_width as i32 {
                out.push(ColorPoint::new(x * d, y * d));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_follows_width_ratio() {
        let g = FrameGeometry::new(320, 240, 640, 480).expect("valid geometry");
        assert_eq!(g.divisor(), 2);
        assert_eq!(g.depth_len(), 320 * 240);
        let mut map = Vec::new();
        g.fill_scaled_map(&mut map);
        assert_eq!(map.len(), g.depth_len());
        assert_eq!(map[321], ColorPoint::new(2, 2));
    }

    #[test]
    fn malformed_geometry_is_rejected() {
        assert!(matches!(
            FrameGeometry::new(640, 480, 320, 240),
            Err(SpotlightError::ZeroDivisor { .. })
        ));
        assert!(matches!(
            FrameGeometry::new(0, 480, 640, 480),
            Err(SpotlightError::EmptyFrame { .. })
        ));
        assert!(matches!(
            FrameGeometry::new(320, 600, 640, 480),
            Err(SpotlightError::DepthExceedsColor { .. })
        ));
    }
}
