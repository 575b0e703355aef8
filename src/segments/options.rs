use super::{Label, MAX_LABEL};
use crate::error::SpotlightError;
use serde::{Deserialize, Serialize};

/// Options for boundary thickening and the seeded flood fill.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Edge values at or above this are treated as confident boundaries and
    /// dilated into their 4-neighbourhood.
    pub edge_threshold: u8,
    /// Seed grid divisions per axis (`N`): row step `height / N`, column
    /// step `width / N`, each at least one pixel.
    pub grid_divisions: usize,
    /// Highest label id the fill may allocate (at most 255).
    pub label_limit: Label,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            edge_threshold: 200,
            grid_divisions: 256,
            label_limit: MAX_LABEL,
        }
    }
}

impl SegmentOptions {
    pub fn validate(&self) -> Result<(), SpotlightError> {
        if self.grid_divisions == 0 {
            return Err(SpotlightError::InvalidParams {
                name: "grid_divisions",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.edge_threshold == 0 {
            return Err(SpotlightError::InvalidParams {
                name: "edge_threshold",
                reason: "zero would treat every pixel as a boundary".to_string(),
            });
        }
        Ok(())
    }

    /// Seed spacing `(column_step, row_step)` for a `width × height` frame.
    pub fn seed_steps(&self, width: usize, height: usize) -> (usize, usize) {
        let n = self.grid_divisions.max(1);
        ((width / n).max(1), (height / n).max(1))
    }
}
