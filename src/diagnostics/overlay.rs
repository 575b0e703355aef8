//! Debug view of the segmentation with region boxes.
use crate::image::GrayImage;
use crate::regions::RegionBox;
use crate::segments::LabelMap;

/// Grey level used for box outlines.
pub const BOX_GRAY: u8 = 100;
/// Outline thickness in pixels, drawn inwards from the box edge.
pub const BOX_THICKNESS: usize = 2;

/// Render `labels` as grey levels into `out` and outline every box.
///
/// Boxes are clipped to the image; degenerate boxes outside it are ignored.
pub fn render_debug_overlay(labels: &LabelMap, boxes: &[RegionBox], out: &mut GrayImage) {
    out.copy_from(labels);
    if out.w == 0 || out.h == 0 {
        return;
    }
    for b in boxes {
        let x0 = b.bounds.x0.min(out.w - 1);
        let y0 = b.bounds.y0.min(out.h - 1);
        let x1 = b.bounds.x1.min(out.w - 1);
        let y1 = b.bounds.y1.min(out.h - 1);
        for t in 0..BOX_THICKNESS {
            // horizontal edges
            for x in x0..=x1 {
                if y0 + t <= y1 {
                    out.set(x, y0 + t, BOX_GRAY);
                }
                if y1 >= y0 + t {
                    out.set(x, y1 - t, BOX_GRAY);
                }
            }
            // vertical edges
            for y in y0..=y1 {
                if x0 + t <= x1 {
                    out.set(x0 + t, y, BOX_GRAY);
                }
                if x1 >= x0 + t {
                    out.set(x1 - t, y, BOX_GRAY);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::IntBounds;

    #[test]
    fn boxes_are_two_pixels_thick() {
        let labels = LabelMap::filled(10, 10, 3);
        let boxes = [RegionBox {
            label: 3,
            bounds: IntBounds {
                x0: 2,
                y0: 2,
                x1: 7,
                y1: 7,
            },
            sample_count: 100,
        }];
        let mut out = GrayImage::default();
        render_debug_overlay(&labels, &boxes, &mut out);
        assert_eq!(out.get(2, 5), BOX_GRAY);
        assert_eq!(out.get(3, 5), BOX_GRAY);
        assert_eq!(out.get(4, 5), 3);
        assert_eq!(out.get(7, 4), BOX_GRAY);
        assert_eq!(out.get(6, 4), BOX_GRAY);
        assert_eq!(out.get(5, 2), BOX_GRAY);
        assert_eq!(out.get(5, 6), BOX_GRAY);
        assert_eq!(out.get(1, 1), 3);
        assert_eq!(out.get(5, 5), 3);
    }
}
