use super::timing::TimingBreakdown;
use crate::depth::FrameGeometry;
use crate::regions::{AcceptedSet, RegionBox, RegionSelection};
use crate::segments::{IntBounds, Label, Segmentation};
use serde::Serialize;

/// Summary of one processed pass returned by
/// [`SpotlightPipeline::process`](crate::SpotlightPipeline::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub input: InputDescriptor,
    /// Overlay pixels written by registration.
    pub registered_pixels: usize,
    /// Edge pixels after thickening.
    pub edge_pixels: usize,
    pub seeds_visited: usize,
    pub edge_seeds: usize,
    pub dropped_seeds: usize,
    pub label_space_exhausted: bool,
    pub regions: Vec<RegionSummary>,
    pub boxes: Vec<RegionBox>,
    pub accepted: AcceptedSet,
    /// `false` when no colour frame arrived and the previous output was kept.
    pub color_attenuated: bool,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub depth_width: usize,
    pub depth_height: usize,
    pub color_width: usize,
    pub color_height: usize,
    pub divisor: usize,
}

impl From<&FrameGeometry> for InputDescriptor {
    fn from(g: &FrameGeometry) -> Self {
        Self {
            depth_width: g.depth_width(),
            depth_height: g.depth_height(),
            color_width: g.color_width(),
            color_height: g.color_height(),
            divisor: g.divisor(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub label: Label,
    pub sample_count: usize,
    pub area_px: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<IntBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f32; 2]>,
    pub accepted: bool,
}

impl RegionSummary {
    pub fn collect(segmentation: &Segmentation, accepted: &AcceptedSet) -> Vec<Self> {
        segmentation
            .regions
            .iter()
            .map(|r| Self {
                label: r.label,
                sample_count: r.sample_count(),
                area_px: r.area_px,
                bounds: r.bounds(),
                centroid: r.centroid().map(|(x, y)| [x, y]),
                accepted: accepted.contains(r.label),
            })
            .collect()
    }
}

impl FrameReport {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        frame_index: u64,
        geometry: &FrameGeometry,
        registered_pixels: usize,
        edge_pixels: usize,
        segmentation: &Segmentation,
        selection: &RegionSelection,
        color_attenuated: bool,
        timings: TimingBreakdown,
    ) -> Self {
        Self {
            frame_index,
            input: geometry.into(),
            registered_pixels,
            edge_pixels,
            seeds_visited: segmentation.seeds_visited,
            edge_seeds: segmentation.edge_seeds,
            dropped_seeds: segmentation.dropped_seeds,
            label_space_exhausted: segmentation.label_space_exhausted,
            regions: RegionSummary::collect(segmentation, &selection.accepted),
            boxes: selection.boxes.clone(),
            accepted: selection.accepted,
            color_attenuated,
            timings,
        }
    }

    pub fn accepted_labels(&self) -> Vec<Label> {
        self.accepted.iter().collect()
    }
}
