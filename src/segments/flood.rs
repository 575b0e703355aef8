use super::{Label, LabelMap, UNLABELLED};
use crate::image::GrayImage;

const NEIGH_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Paint `label` over the 4-connected non-edge pixels reachable from
/// `(seed_x, seed_y)` that are still unlabelled. Returns the painted area.
///
/// A seed on an edge or already labelled pixel paints nothing. `stack` is
/// scratch space reused across fills.
pub fn flood_fill(
    edges: &GrayImage,
    labels: &mut LabelMap,
    seed_x: usize,
    seed_y: usize,
    label: Label,
    stack: &mut Vec<usize>,
) -> usize {
    let w = edges.w;
    let h = edges.h;
    debug_assert_eq!((labels.w, labels.h), (w, h), "label map must match the edge map");
    let seed = edges.idx(seed_x, seed_y);
    if edges.data[seed] != 0 || labels.data[seed] != UNLABELLED {
        return 0;
    }

    stack.clear();
    labels.data[seed] = label;
    stack.push(seed);
    let mut area = 0usize;

    while let Some(idx) = stack.pop() {
        area += 1;
        let x = idx % w;
        let y = idx / w;
        for (dx, dy) in NEIGH_OFFSETS {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                continue;
            }
            let neighbor_idx = yn as usize * w + xn as usize;
            if edges.data[neighbor_idx] != 0 || labels.data[neighbor_idx] != UNLABELLED {
                continue;
            }
            labels.data[neighbor_idx] = label;
            stack.push(neighbor_idx);
        }
    }
    area
}
