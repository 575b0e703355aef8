//! Edge extraction on the registered intensity overlay.
//!
//! Stages, in order:
//!
//! - Median blur ([`median`]) with an odd square aperture and replicated
//!   borders. Removes the speckle left by unknown depth pixels.
//! - Gradients ([`grad`]) via 3×3 Sobel (or Scharr) kernels with border
//!   clamping; magnitude is L1 (`|gx| + |gy|`) by default.
//! - Non-maximum suppression ([`nms`]) along the quantised gradient
//!   direction, classifying survivors as weak or strong against the two
//!   thresholds.
//! - Hysteresis ([`hysteresis`]) keeping weak pixels 8-connected to a strong
//!   one. The result is binary: 0 or [`EDGE`].
//!
//! Blur always precedes detection; the thresholds are expressed in the
//! gradient units of 8-bit input (0..255 intensities).

pub mod grad;
pub mod hysteresis;
pub mod median;
pub mod nms;

pub use grad::{image_gradients, Grad, GradientKernel, GradientNorm};
pub use hysteresis::trace_hysteresis;
pub use median::median_blur;
pub use nms::{suppress_non_maxima, EdgeClass};

use crate::error::SpotlightError;
use crate::image::{GrayImage, ImageF32, ImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// Value of an edge pixel in binary edge maps.
pub const EDGE: u8 = 255;

/// Options for the blur + edge detection stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Median aperture (odd, >= 1). `1` disables the blur.
    pub median_aperture: usize,
    /// Hysteresis low threshold: weaker responses are never edges.
    pub low_threshold: f32,
    /// Hysteresis high threshold: stronger responses always seed an edge.
    pub high_threshold: f32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            median_aperture: 5,
            low_threshold: 50.0,
            high_threshold: 100.0,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L1,
        }
    }
}

impl EdgeOptions {
    pub fn validate(&self) -> Result<(), SpotlightError> {
        if self.median_aperture == 0 || self.median_aperture % 2 == 0 {
            return Err(SpotlightError::InvalidParams {
                name: "median_aperture",
                reason: format!("must be odd and positive, got {}", self.median_aperture),
            });
        }
        if !(self.low_threshold.is_finite() && self.high_threshold.is_finite())
            || self.low_threshold < 0.0
            || self.low_threshold > self.high_threshold
        {
            return Err(SpotlightError::InvalidParams {
                name: "low_threshold",
                reason: format!(
                    "need 0 <= low ({}) <= high ({})",
                    self.low_threshold, self.high_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Scratch buffers reused across frames by [`EdgeExtractor`].
#[derive(Default)]
struct EdgeScratch {
    blurred: GrayImage,
    levels: ImageF32,
    grad: Grad,
    classes: crate::image::Plane<EdgeClass>,
    stack: Vec<usize>,
}

/// Median blur + Canny-style detector with reusable buffers.
#[derive(Default)]
pub struct EdgeExtractor {
    options: EdgeOptions,
    scratch: EdgeScratch,
}

impl EdgeExtractor {
    pub fn new(options: EdgeOptions) -> Self {
        Self {
            options,
            scratch: EdgeScratch::default(),
        }
    }

    pub fn options(&self) -> &EdgeOptions {
        &self.options
    }

    /// Blur `input` and write its binary edge map into `out` (same size).
    pub fn extract(&mut self, input: ImageU8<'_>, out: &mut GrayImage) {
        let s = &mut self.scratch;
        median_blur(input, self.options.median_aperture, &mut s.blurred);

        s.levels.reset(s.blurred.w, s.blurred.h, 0.0);
        for y in 0..s.blurred.h {
            let src = s.blurred.row(y);
            let start = y * s.levels.stride;
            for (dst, &v) in s.levels.data[start..start + s.blurred.w].iter_mut().zip(src) {
                *dst = v as f32;
            }
        }

        image_gradients(&s.levels, self.options.kernel, self.options.norm, &mut s.grad);
        suppress_non_maxima(
            &s.grad,
            self.options.low_threshold,
            self.options.high_threshold,
            &mut s.classes,
        );
        trace_hysteresis(&s.classes, &mut s.stack, out);
    }
}

/// One-shot convenience wrapper around [`EdgeExtractor`].
pub fn extract_edges(input: ImageU8<'_>, options: EdgeOptions) -> GrayImage {
    let mut out = GrayImage::default();
    EdgeExtractor::new(options).extract(input, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(w: usize, h: usize, x0: usize, y0: usize, side: usize, value: u8) -> GrayImage {
        let mut img = GrayImage::new(w, h);
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                img.set(x, y, value);
            }
        }
        img
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImage::filled(32, 24, 128);
        let edges = extract_edges(img.as_view(), EdgeOptions::default());
        assert_eq!(edges.count_nonzero(), 0);
    }

    #[test]
    fn square_outline_is_binary_and_thin() {
        let img = square(64, 48, 20, 10, 20, 224);
        let edges = extract_edges(img.as_view(), EdgeOptions::default());
        assert!(edges.data.iter().all(|&v| v == 0 || v == EDGE));
        // Left side: exactly one edge column near x = 19/20 in the middle rows.
        let row = edges.row(20);
        let hits: Vec<usize> = (0..64).filter(|&x| row[x] == EDGE).collect();
        assert_eq!(hits.len(), 2, "expected left and right edge, got {hits:?}");
        assert!((18..=21).contains(&hits[0]), "left edge at {}", hits[0]);
        assert!((38..=41).contains(&hits[1]), "right edge at {}", hits[1]);
        // Interior stays clear.
        assert_eq!(edges.get(30, 20), 0);
    }

    #[test]
    fn weak_step_below_low_threshold_is_ignored() {
        // A step of 5 gives an L1 Sobel response of 20 < 50.
        let img = square(32, 32, 8, 8, 16, 5);
        let edges = extract_edges(img.as_view(), EdgeOptions::default());
        assert_eq!(edges.count_nonzero(), 0);
    }

    #[test]
    fn options_validation_rejects_even_aperture() {
        let opts = EdgeOptions {
            median_aperture: 4,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
        let opts = EdgeOptions {
            low_threshold: 120.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
        assert!(EdgeOptions::default().validate().is_ok());
    }
}
