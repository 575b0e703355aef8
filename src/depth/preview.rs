//! Depth-resolution visualisation of a raw depth frame.
//!
//! Measured samples nearer than the ramp maximum are drawn grey with the
//! ramp intensity, the unknown sentinel is drawn blue, everything else black.
//! Every pixel is half transparent so the preview can sit over colour.
use super::geometry::FrameGeometry;
use super::intensity::{intensity, MAX_DEPTH_MM};
use super::sample::DepthSample;
use crate::error::SpotlightError;
use crate::image::{Bgra, BgraImage};

pub const PREVIEW_ALPHA: u8 = 255 / 2;
const UNKNOWN_COLOR: Bgra = Bgra::new(255, 0, 0, PREVIEW_ALPHA);
const OUT_OF_RANGE_COLOR: Bgra = Bgra::new(0, 0, 0, PREVIEW_ALPHA);

pub fn render_depth_preview(
    depth: &[DepthSample],
    geometry: &FrameGeometry,
    out: &mut BgraImage,
) -> Result<(), SpotlightError> {
    SpotlightError::check_len("depth", geometry.depth_len(), depth.len())?;
    out.reset(geometry.depth_width(), geometry.depth_height(), OUT_OF_RANGE_COLOR);
    for (dst, sample) in out.data.iter_mut().zip(depth) {
        let mm = sample.millimetres() as i32;
        *dst = if sample.is_unknown_sentinel() {
            UNKNOWN_COLOR
        } else if mm >= 0 && mm < MAX_DEPTH_MM {
            Bgra::gray(intensity(mm), PREVIEW_ALPHA)
        } else {
            OUT_OF_RANGE_COLOR
        };
    }
    Ok(())
}
