//! Median blur with a square odd aperture and replicated borders.
//!
//! Rows are independent, so they are filtered in parallel with rayon; each
//! worker keeps its own window buffer and the result does not depend on the
//! scheduling.
use crate::image::{GrayImage, ImageU8, ImageView};
use rayon::prelude::*;

/// Median-filter `input` into `out` using an `aperture × aperture` window.
///
/// `aperture` must be odd; `1` copies the input unchanged.
pub fn median_blur(input: ImageU8<'_>, aperture: usize, out: &mut GrayImage) {
    debug_assert!(aperture % 2 == 1, "median aperture must be odd");
    let w = input.w;
    let h = input.h;
    out.reset(w, h, 0);
    if w == 0 || h == 0 {
        return;
    }
    if aperture <= 1 {
        for y in 0..h {
            out.data[y * w..(y + 1) * w].copy_from_slice(input.row(y));
        }
        return;
    }

    let radius = (aperture / 2) as isize;
    let window_len = aperture * aperture;
    let mid = window_len / 2;

    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each_init(
            || Vec::with_capacity(window_len),
            |window, (y, dst_row)| {
                let rows: Vec<&[u8]> = (-radius..=radius)
                    .map(|dy| input.row(clamp_index(y as isize + dy, h)))
                    .collect();
                for (x, dst) in dst_row.iter_mut().enumerate() {
                    window.clear();
                    for row in &rows {
                        for dx in -radius..=radius {
                            window.push(row[clamp_index(x as isize + dx, w)]);
                        }
                    }
                    let (_, median, _) = window.select_nth_unstable(mid);
                    *dst = *median;
                }
            },
        );
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_speckle_is_removed() {
        let mut img = GrayImage::filled(7, 7, 10);
        img.set(3, 3, 250);
        let mut out = GrayImage::default();
        median_blur(img.as_view(), 3, &mut out);
        assert!(out.data.iter().all(|&v| v == 10));
    }

    #[test]
    fn straight_step_is_preserved() {
        let mut img = GrayImage::new(9, 9);
        for y in 0..9 {
            for x in 4..9 {
                img.set(x, y, 200);
            }
        }
        let mut out = GrayImage::default();
        median_blur(img.as_view(), 5, &mut out);
        assert_eq!(out, img);
    }

    #[test]
    fn aperture_one_copies_input() {
        let img = GrayImage::from_vec(3, 1, vec![1, 2, 3]).expect("valid length");
        let mut out = GrayImage::default();
        median_blur(img.as_view(), 1, &mut out);
        assert_eq!(out.data, vec![1, 2, 3]);
    }
}
