//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! For each interior pixel the gradient direction is quantised into one of
//! four sectors (0°, 45°, 90°, 135°) and the magnitude is compared against
//! its two neighbours along that direction. Axis-aligned sectors break ties
//! asymmetrically (`>` before, `>=` after) so a symmetric step keeps exactly
//! one of its two equal responses; diagonal sectors require a strict maximum.
//!
//! Survivors are classified against the hysteresis thresholds. The outermost
//! 1‑pixel frame is never an edge, which keeps neighbour lookups in bounds.
use super::grad::Grad;
use crate::image::{ImageView, Plane};

/// Per-pixel outcome of suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeClass {
    #[default]
    None,
    /// Local maximum above the low threshold.
    Weak,
    /// Local maximum above the high threshold.
    Strong,
}

const TAN_22_5_DEG: f32 = 0.41421356237;

pub fn suppress_non_maxima(grad: &Grad, low: f32, high: f32, out: &mut Plane<EdgeClass>) {
    let w = grad.mag.w;
    let h = grad.mag.h;
    out.reset(w, h, EdgeClass::None);
    if w < 3 || h < 3 {
        return;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_start = y * out.stride;

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();

            let is_max = if abs_gy <= abs_gx * TAN_22_5_DEG {
                mag > mag_row[x - 1] && mag >= mag_row[x + 1]
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                mag > mag_prev[x] && mag >= mag_next[x]
            } else if (gx >= 0.0) == (gy >= 0.0) {
                // Gradient points down-right / up-left.
                mag > mag_prev[x - 1] && mag > mag_next[x + 1]
            } else {
                mag > mag_prev[x + 1] && mag > mag_next[x - 1]
            };

            if is_max {
                out.data[out_start + x] = if mag > high {
                    EdgeClass::Strong
                } else {
                    EdgeClass::Weak
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::{image_gradients, GradientKernel, GradientNorm};
    use crate::image::ImageF32;

    fn step(w: usize, h: usize, split_x: usize, value: f32) -> Grad {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split_x..w {
                img.set(x, y, value);
            }
        }
        let mut grad = Grad::default();
        image_gradients(&img, GradientKernel::Sobel, GradientNorm::L1, &mut grad);
        grad
    }

    #[test]
    fn symmetric_step_keeps_one_column() {
        let grad = step(10, 5, 5, 100.0);
        let mut classes = Plane::default();
        suppress_non_maxima(&grad, 50.0, 100.0, &mut classes);
        let row: Vec<EdgeClass> = classes.row(2).to_vec();
        assert_eq!(row[4], EdgeClass::Strong);
        assert_eq!(row[5], EdgeClass::None);
        assert_eq!(row.iter().filter(|c| **c != EdgeClass::None).count(), 1);
    }

    #[test]
    fn classes_follow_thresholds() {
        // Step of 20 -> response 80: weak between 50 and 100.
        let grad = step(10, 5, 5, 20.0);
        let mut classes = Plane::default();
        suppress_non_maxima(&grad, 50.0, 100.0, &mut classes);
        assert_eq!(classes.get(4, 2), EdgeClass::Weak);

        suppress_non_maxima(&grad, 80.0, 100.0, &mut classes);
        assert_eq!(classes.get(4, 2), EdgeClass::None);
    }
}
