//! Parameter types configuring the spotlight stages.
//!
//! Every struct deserialises with `#[serde(default)]`, so a config only
//! needs to name the knobs it changes.

use crate::depth::RegistrationOptions;
use crate::edges::EdgeOptions;
use crate::error::SpotlightError;
use crate::regions::RegionFilterOptions;
use crate::segments::SegmentOptions;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightParams {
    pub registration: RegistrationOptions,
    pub edges: EdgeOptions,
    pub segments: SegmentOptions,
    pub regions: RegionFilterOptions,
    /// Output sampling factor of the colour attenuator (1 = full resolution).
    pub attenuation_downscale: usize,
}

impl Default for SpotlightParams {
    fn default() -> Self {
        Self {
            registration: RegistrationOptions::default(),
            edges: EdgeOptions::default(),
            segments: SegmentOptions::default(),
            regions: RegionFilterOptions::default(),
            attenuation_downscale: 1,
        }
    }
}

impl SpotlightParams {
    pub fn validate(&self) -> Result<(), SpotlightError> {
        self.edges.validate()?;
        self.segments.validate()?;
        self.regions.validate()?;
        if self.attenuation_downscale == 0 {
            return Err(SpotlightError::InvalidParams {
                name: "attenuation_downscale",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: SpotlightParams = serde_json::from_str(
            r#"{ "segments": { "grid_divisions": 64 }, "attenuation_downscale": 2 }"#,
        )
        .expect("valid json");
        assert_eq!(params.segments.grid_divisions, 64);
        assert_eq!(params.segments.label_limit, 255);
        assert_eq!(params.attenuation_downscale, 2);
        assert_eq!(params.regions.min_samples, 100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_downscale_is_rejected() {
        let params = SpotlightParams {
            attenuation_downscale: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
