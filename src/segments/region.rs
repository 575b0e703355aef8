use super::Label;
use serde::Serialize;

/// Coarse-grid seed position that resolved to a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SamplePoint {
    pub x: u32,
    pub y: u32,
}

/// Inclusive integer pixel bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IntBounds {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl IntBounds {
    #[inline]
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0) + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0) + 1
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// One grown region: its label, the grid samples that fell on it and the
/// number of pixels its fill painted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub label: Label,
    pub samples: Vec<SamplePoint>,
    pub area_px: usize,
    #[serde(skip)]
    sum_x: u64,
    #[serde(skip)]
    sum_y: u64,
    #[serde(skip)]
    bounds: Option<IntBounds>,
}

impl Region {
    pub(crate) fn new(label: Label, area_px: usize) -> Self {
        Self {
            label,
            samples: Vec::new(),
            area_px,
            sum_x: 0,
            sum_y: 0,
            bounds: None,
        }
    }

    pub(crate) fn push(&mut self, x: usize, y: usize) {
        self.samples.push(SamplePoint {
            x: x as u32,
            y: y as u32,
        });
        self.sum_x += x as u64;
        self.sum_y += y as u64;
        self.bounds = Some(match self.bounds {
            None => IntBounds {
                x0: x,
                y0: y,
                x1: x,
                y1: y,
            },
            Some(b) => IntBounds {
                x0: b.x0.min(x),
                y0: b.y0.min(y),
                x1: b.x1.max(x),
                y1: b.y1.max(y),
            },
        });
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Axis-aligned bounds of the recorded samples, `None` without samples.
    pub fn bounds(&self) -> Option<IntBounds> {
        self.bounds
    }

    /// Mean sample position.
    pub fn centroid(&self) -> Option<(f32, f32)> {
        if self.samples.is_empty() {
            return None;
        }
        let n = self.samples.len() as f32;
        Some((self.sum_x as f32 / n, self.sum_y as f32 / n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_track_samples() {
        let mut region = Region::new(3, 100);
        assert!(region.bounds().is_none());
        region.push(10, 4);
        region.push(2, 8);
        region.push(6, 6);
        let b = region.bounds().expect("has samples");
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (2, 4, 10, 8));
        assert_eq!((b.width(), b.height()), (9, 5));
        assert_eq!(region.sample_count(), 3);
        assert_eq!(region.centroid(), Some((6.0, 6.0)));
    }
}
