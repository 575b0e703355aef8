//! Colour attenuation: dims every pixel whose region is not accepted.
//!
//! The attenuator reads the raw colour frame and writes a separate output
//! buffer, so running it twice on the same inputs yields the same result.
//! Attenuating an already attenuated buffer would divide alpha again; no
//! in-place variant is offered.
use crate::error::SpotlightError;
use crate::image::{Bgra, BgraImage};
use crate::regions::AcceptedSet;
use crate::segments::LabelMap;

/// Alpha divisor applied to pixels outside the accepted set.
pub const ALPHA_ATTENUATION: u8 = 8;

/// Write `color` sampled every `downscale` pixels into `out`, dimming pixels
/// whose label at the same colour coordinate is not in `accepted`.
///
/// `labels` must cover the colour frame. Output size is
/// `(color.w / downscale) × (color.h / downscale)`.
pub fn attenuate(
    color: &BgraImage,
    labels: &LabelMap,
    accepted: &AcceptedSet,
    downscale: usize,
    out: &mut BgraImage,
) -> Result<(), SpotlightError> {
    if downscale == 0 {
        return Err(SpotlightError::InvalidParams {
            name: "downscale",
            reason: "must be at least 1".to_string(),
        });
    }
    SpotlightError::check_len("label map", color.w * color.h, labels.w * labels.h)?;
    if labels.w != color.w {
        return Err(SpotlightError::BufferLength {
            buffer: "label map row",
            expected: color.w,
            actual: labels.w,
        });
    }

    let (w, h) = (color.w / downscale, color.h / downscale);
    out.reset(w, h, Bgra::default());
    for y in 0..h {
        let sy = y * downscale;
        let src = &color.data[sy * color.stride..];
        let lab = &labels.data[sy * labels.stride..];
        let dst = &mut out.data[y * w..(y + 1) * w];
        for (x, px) in dst.iter_mut().enumerate() {
            let sx = x * downscale;
            let mut c = src[sx];
            if !accepted.contains(lab[sx]) {
                c.a /= ALPHA_ATTENUATION;
            }
            *px = c;
        }
    }
    Ok(())
}
