//! Depth → colour registration of the intensity overlay.
//!
//! For every known depth sample the sensor-provided colour coordinate is
//! range-checked against the colour frame, scaled down by the geometry's
//! divisor and, when it lands inside the depth frame, the sample's intensity
//! is written at that scaled position of a colour-resolution buffer.
//!
//! The overlay is therefore addressed in depth-scaled units while living in a
//! colour-sized buffer; the rest of the buffer stays at background. Later
//! stages consume the same buffer size, so their coordinates stay aligned.
use super::geometry::FrameGeometry;
use super::intensity::{intensity, MAX_DEPTH_MM};
use super::sample::{ColorPoint, DepthSample};
use crate::error::SpotlightError;
use crate::image::{Bgra, BgraImage, GrayImage};
use serde::{Deserialize, Serialize};

/// Intensity written for pixels no sample landed on.
pub const BACKGROUND_INTENSITY: u8 = 0;
/// Opacity of every overlay pixel, written or not.
pub const OVERLAY_OPACITY: u8 = 255;

/// Lower-bound rule for the scaled coordinate check.
///
/// The observed behaviour accepts `x > 0` but `y >= 0`, so column 0 of the
/// overlay is never written. `Inclusive` accepts `>= 0` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisBounds {
    #[default]
    Observed,
    Inclusive,
}

impl AxisBounds {
    #[inline]
    fn accepts(self, x: i64, y: i64, width: usize, height: usize) -> bool {
        let x_ok = match self {
            AxisBounds::Observed => x > 0,
            AxisBounds::Inclusive => x >= 0,
        };
        x_ok && x < width as i64 && y >= 0 && y < height as i64
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationOptions {
    /// Lower-bound rule applied to scaled coordinates.
    pub axis_bounds: AxisBounds,
    /// Samples at or beyond this distance (mm) leave the pixel at background.
    pub max_depth_mm: i32,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            axis_bounds: AxisBounds::Observed,
            max_depth_mm: MAX_DEPTH_MM,
        }
    }
}

/// Colour-resolution overlay of depth intensities with an opacity plane.
#[derive(Clone, Debug, Default)]
pub struct IntensityBuffer {
    pub intensity: GrayImage,
    pub opacity: GrayImage,
}

impl IntensityBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            intensity: GrayImage::filled(w, h, BACKGROUND_INTENSITY),
            opacity: GrayImage::filled(w, h, OVERLAY_OPACITY),
        }
    }

    /// Resize to `w × h` and restore every pixel to background.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.intensity.reset(w, h, BACKGROUND_INTENSITY);
        self.opacity.reset(w, h, OVERLAY_OPACITY);
    }

    pub fn width(&self) -> usize {
        self.intensity.w
    }

    pub fn height(&self) -> usize {
        self.intensity.h
    }

    /// Render as grey BGRA for display.
    pub fn render_bgra(&self, out: &mut BgraImage) {
        out.reset(self.width(), self.height(), Bgra::default());
        for ((dst, &i), &a) in out
            .data
            .iter_mut()
            .zip(&self.intensity.data)
            .zip(&self.opacity.data)
        {
            *dst = Bgra::gray(i, a);
        }
    }
}

/// Register one depth frame into `out`, returning the number of pixels written.
///
/// `depth` and `map` must both hold `geometry.depth_len()` entries; anything
/// else is a configuration error reported before the buffer is touched.
pub fn register_depth(
    depth: &[DepthSample],
    map: &[ColorPoint],
    geometry: &FrameGeometry,
    options: &RegistrationOptions,
    out: &mut IntensityBuffer,
) -> Result<usize, SpotlightError> {
    SpotlightError::check_len("depth", geometry.depth_len(), depth.len())?;
    SpotlightError::check_len("depth-to-color map", geometry.depth_len(), map.len())?;

    out.reset(geometry.color_width(), geometry.color_height());
    let color_w = geometry.color_width() as i64;
    let color_h = geometry.color_height() as i64;
    let divisor = geometry.divisor() as i64;

    let mut written = 0usize;
    for (sample, point) in depth.iter().zip(map) {
        if !sample.is_known() {
            continue;
        }
        let (px, py) = (point.x as i64, point.y as i64);
        if px < 0 || py < 0 || px >= color_w || py >= color_h {
            continue;
        }
        let cx = px / divisor;
        let cy = py / divisor;
        if !options
            .axis_bounds
            .accepts(cx, cy, geometry.depth_width(), geometry.depth_height())
        {
            continue;
        }
        let distance = sample.millimetres() as i32;
        if distance >= options.max_depth_mm {
            continue;
        }
        let Some(idx) = out.intensity.checked_idx(cx, cy) else {
            continue;
        };
        out.intensity.data[idx] = intensity(distance);
        out.opacity.data[idx] = OVERLAY_OPACITY;
        written += 1;
    }
    Ok(written)
}
