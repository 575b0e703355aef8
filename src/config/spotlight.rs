use crate::pipeline::SpotlightParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SpotlightToolConfig {
    /// 16-bit grey PNG with one distance in millimetres per pixel.
    pub depth_png: PathBuf,
    /// Colour frame. Without it the pass runs depth-only and the colour
    /// geometry defaults to the depth geometry.
    #[serde(default)]
    pub color_png: Option<PathBuf>,
    #[serde(default)]
    pub params: SpotlightParams,
    pub output: SpotlightOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SpotlightOutputConfig {
    pub report_json: PathBuf,
    /// Attenuated colour frame.
    #[serde(default)]
    pub spotlight_image: Option<PathBuf>,
    /// Registered intensity overlay.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    /// Label map with region boxes.
    #[serde(default)]
    pub debug_image: Option<PathBuf>,
    /// Depth-resolution preview of the raw frame.
    #[serde(default)]
    pub preview_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SpotlightToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: SpotlightToolConfig = serde_json::from_str(
            r#"{
                "depth_png": "in/depth.png",
                "params": { "regions": { "min_samples": 50 } },
                "output": { "report_json": "out/report.json" }
            }"#,
        )
        .expect("valid config");
        assert!(config.color_png.is_none());
        assert_eq!(config.params.regions.min_samples, 50);
        assert_eq!(config.params.regions.max_accepted_samples, 4000);
        assert!(config.output.debug_image.is_none());
    }
}
