use crate::edges::EDGE;
use crate::image::GrayImage;

/// Dilate confident edges into their 4-neighbourhood, in place.
///
/// Only pixels that were `>= threshold` before the pass spread; painted
/// neighbours do not cascade further. `snapshot` is scratch space for the
/// pre-pass copy.
pub fn thicken_boundaries(edges: &mut GrayImage, threshold: u8, snapshot: &mut GrayImage) {
    snapshot.copy_from(edges);
    let w = edges.w;
    let h = edges.h;
    for y in 0..h {
        let row = y * snapshot.stride;
        for x in 0..w {
            if snapshot.data[row + x] < threshold {
                continue;
            }
            if x + 1 < w {
                edges.data[row + x + 1] = EDGE;
            }
            if x > 0 {
                edges.data[row + x - 1] = EDGE;
            }
            if y + 1 < h {
                edges.data[row + edges.stride + x] = EDGE;
            }
            if y > 0 {
                edges.data[row - edges.stride + x] = EDGE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_becomes_a_plus() {
        let mut edges = GrayImage::new(5, 5);
        edges.set(2, 2, EDGE);
        thicken_boundaries(&mut edges, 200, &mut GrayImage::default());
        let expected = [(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)];
        assert_eq!(edges.count_nonzero(), expected.len());
        for (x, y) in expected {
            assert_eq!(edges.get(x, y), EDGE, "({x}, {y})");
        }
    }

    #[test]
    fn weak_values_do_not_spread_and_borders_are_safe() {
        let mut edges = GrayImage::new(3, 3);
        edges.set(0, 0, EDGE);
        edges.set(2, 2, 199);
        thicken_boundaries(&mut edges, 200, &mut GrayImage::default());
        assert_eq!(edges.get(1, 0), EDGE);
        assert_eq!(edges.get(0, 1), EDGE);
        assert_eq!(edges.get(2, 1), 0);
        assert_eq!(edges.get(1, 2), 0);
        assert_eq!(edges.get(2, 2), 199);
    }
}
