//! JSON configuration for the `spotlight` demo tool.
pub mod spotlight;

pub use spotlight::{load_config, SpotlightOutputConfig, SpotlightToolConfig};
