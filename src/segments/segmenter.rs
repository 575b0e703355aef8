use super::flood::flood_fill;
use super::options::SegmentOptions;
use super::region::Region;
use super::thicken::thicken_boundaries;
use super::{Label, LabelMap, UNLABELLED};
use crate::image::GrayImage;
use log::{debug, warn};
use serde::Serialize;

/// Result of one segmentation pass.
///
/// `regions[i]` holds label `i + 1`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation {
    pub regions: Vec<Region>,
    /// Grid seeds examined during the sweep.
    pub seeds_visited: usize,
    /// Seeds that landed on an edge pixel.
    pub edge_seeds: usize,
    /// Unlabelled seeds that could not get a label id.
    pub dropped_seeds: usize,
    pub label_space_exhausted: bool,
}

impl Segmentation {
    pub fn clear(&mut self) {
        self.regions.clear();
        self.seeds_visited = 0;
        self.edge_seeds = 0;
        self.dropped_seeds = 0;
        self.label_space_exhausted = false;
    }

    pub fn labels_allocated(&self) -> usize {
        self.regions.len()
    }

    pub fn region(&self, label: Label) -> Option<&Region> {
        (label as usize)
            .checked_sub(1)
            .and_then(|i| self.regions.get(i))
    }
}

/// Boundary thickening + seeded flood fill with reusable scratch buffers.
pub struct RegionSegmenter {
    options: SegmentOptions,
    snapshot: GrayImage,
    stack: Vec<usize>,
}

impl RegionSegmenter {
    pub fn new(options: SegmentOptions) -> Self {
        Self {
            options,
            snapshot: GrayImage::default(),
            stack: Vec::with_capacity(1024),
        }
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment `edges` (thickened in place) into `labels` and `out`.
    pub fn segment(&mut self, edges: &mut GrayImage, labels: &mut LabelMap, out: &mut Segmentation) {
        out.clear();
        labels.reset(edges.w, edges.h, UNLABELLED);
        thicken_boundaries(edges, self.options.edge_threshold, &mut self.snapshot);

        let (w, h) = (edges.w, edges.h);
        if w == 0 || h == 0 {
            return;
        }
        let (col_step, row_step) = self.options.seed_steps(w, h);
        let limit = self.options.label_limit;

        let mut y = h - 1;
        while y > 0 {
            let mut x = w - 1;
            while x > 0 {
                self.visit_seed(edges, labels, x, y, limit, out);
                x = x.saturating_sub(col_step);
            }
            y = y.saturating_sub(row_step);
        }

        if out.label_space_exhausted {
            warn!(
                "label space exhausted at {} labels; {} seeds left unassigned",
                limit, out.dropped_seeds
            );
        }
        debug!(
            "segmenter: {} regions from {} seeds ({} on edges, step {}x{})",
            out.regions.len(),
            out.seeds_visited,
            out.edge_seeds,
            col_step,
            row_step
        );
    }

    fn visit_seed(
        &mut self,
        edges: &GrayImage,
        labels: &mut LabelMap,
        x: usize,
        y: usize,
        limit: Label,
        out: &mut Segmentation,
    ) {
        out.seeds_visited += 1;
        let idx = edges.idx(x, y);
        if edges.data[idx] != 0 {
            out.edge_seeds += 1;
            return;
        }

        let existing = labels.data[idx];
        if existing != UNLABELLED {
            out.regions[existing as usize - 1].push(x, y);
            return;
        }

        let next = out.regions.len() + 1;
        if next > limit as usize {
            out.label_space_exhausted = true;
            out.dropped_seeds += 1;
            return;
        }
        let label = next as Label;
        let area = flood_fill(edges, labels, x, y, label, &mut self.stack);
        let mut region = Region::new(label, area);
        region.push(x, y);
        out.regions.push(region);
    }
}
