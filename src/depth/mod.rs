//! Depth frame model and the depth → colour registration stage.
//!
//! - [`DepthSample`]: millimetre distance with the player-index bits removed
//!   and an explicit "unknown" notion.
//! - [`FrameGeometry`]: validated depth/colour resolutions and the integer
//!   colour-to-depth divisor.
//! - [`intensity`]: clamped linear ramp from distance to an 8-bit intensity.
//! - [`registrar`]: writes intensities into a colour-resolution overlay using
//!   the sensor-provided depth → colour coordinate map.
//! - [`preview`]: depth-resolution BGRA visualisation of a raw frame.

pub mod geometry;
pub mod intensity;
pub mod preview;
pub mod registrar;
mod sample;

pub use geometry::FrameGeometry;
pub use intensity::{intensity, MAX_DEPTH_MM, MIN_DEPTH_MM};
pub use preview::render_depth_preview;
pub use registrar::{register_depth, AxisBounds, IntensityBuffer, RegistrationOptions};
pub use sample::{ColorPoint, DepthSample, PLAYER_INDEX_BITMASK_WIDTH, UNKNOWN_DEPTH};
