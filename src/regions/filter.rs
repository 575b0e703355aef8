use super::accepted::AcceptedSet;
use crate::error::SpotlightError;
use crate::segments::{IntBounds, Label, Segmentation};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionFilterOptions {
    /// Regions with fewer grid samples are noise and ignored entirely.
    pub min_samples: usize,
    /// Regions with this many samples or more are background, never accepted.
    pub max_accepted_samples: usize,
    /// Boxes wider/taller than this fraction of the frame are not drawn.
    pub max_box_fraction: f32,
}

impl Default for RegionFilterOptions {
    fn default() -> Self {
        Self {
            min_samples: 100,
            max_accepted_samples: 4000,
            max_box_fraction: 0.6,
        }
    }
}

impl RegionFilterOptions {
    pub fn validate(&self) -> Result<(), SpotlightError> {
        if !(self.max_box_fraction > 0.0 && self.max_box_fraction <= 1.0) {
            return Err(SpotlightError::InvalidParams {
                name: "max_box_fraction",
                reason: format!("must lie in (0, 1], got {}", self.max_box_fraction),
            });
        }
        if self.max_accepted_samples <= self.min_samples {
            return Err(SpotlightError::InvalidParams {
                name: "max_accepted_samples",
                reason: format!(
                    "acceptance band [{}, {}) is empty",
                    self.min_samples, self.max_accepted_samples
                ),
            });
        }
        Ok(())
    }
}

/// Bounding box of one region's samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBox {
    pub label: Label,
    pub bounds: IntBounds,
    pub sample_count: usize,
}

/// Per-frame output of the region filter.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    pub boxes: Vec<RegionBox>,
    pub accepted: AcceptedSet,
}

/// Build boxes and the accepted set for a `frame_w × frame_h` segmentation.
pub fn select_regions(
    segmentation: &Segmentation,
    frame_w: usize,
    frame_h: usize,
    options: &RegionFilterOptions,
) -> RegionSelection {
    let max_w = options.max_box_fraction * frame_w as f32;
    let max_h = options.max_box_fraction * frame_h as f32;
    let mut boxes = Vec::new();
    let mut accepted = Vec::new();

    for region in &segmentation.regions {
        let count = region.sample_count();
        if count < options.min_samples {
            continue;
        }
        if let Some(bounds) = region.bounds() {
            if bounds.width() as f32 <= max_w && bounds.height() as f32 <= max_h {
                boxes.push(RegionBox {
                    label: region.label,
                    bounds,
                    sample_count: count,
                });
            }
        }
        if count < options.max_accepted_samples {
            accepted.push(region.label);
        }
    }

    RegionSelection {
        boxes,
        accepted: accepted.into_iter().collect(),
    }
}
