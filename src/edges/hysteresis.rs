//! Hysteresis tracing: keep weak responses connected to a strong one.
use super::nms::EdgeClass;
use super::EDGE;
use crate::image::{GrayImage, Plane};

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Write a binary edge map (0 / [`EDGE`]) into `out`.
///
/// Strong pixels seed a depth-first walk over 8-connected weak pixels;
/// `stack` is scratch space reused across calls.
pub fn trace_hysteresis(classes: &Plane<EdgeClass>, stack: &mut Vec<usize>, out: &mut GrayImage) {
    let w = classes.w;
    let h = classes.h;
    out.reset(w, h, 0);
    stack.clear();

    for (idx, class) in classes.data.iter().enumerate() {
        if *class == EdgeClass::Strong {
            out.data[idx] = EDGE;
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        for (dx, dy) in NEIGH_OFFSETS {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                continue;
            }
            let neighbor_idx = yn as usize * w + xn as usize;
            if out.data[neighbor_idx] == 0 && classes.data[neighbor_idx] == EdgeClass::Weak {
                out.data[neighbor_idx] = EDGE;
                stack.push(neighbor_idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_chain_attached_to_strong_survives() {
        let mut classes = Plane::new(6, 3);
        classes.set(1, 1, EdgeClass::Strong);
        classes.set(2, 1, EdgeClass::Weak);
        classes.set(3, 0, EdgeClass::Weak);
        // Isolated weak pixel.
        classes.set(5, 2, EdgeClass::Weak);

        let mut out = GrayImage::default();
        trace_hysteresis(&classes, &mut Vec::new(), &mut out);

        assert_eq!(out.get(1, 1), EDGE);
        assert_eq!(out.get(2, 1), EDGE);
        assert_eq!(out.get(3, 0), EDGE);
        assert_eq!(out.get(5, 2), 0);
        assert_eq!(out.count_nonzero(), 3);
    }
}
