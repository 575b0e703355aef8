#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;

// Stage modules – public so tools can run stages individually.
pub mod attenuate;
pub mod depth;
pub mod edges;
pub mod regions;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + geometry.
pub use crate::depth::FrameGeometry;
pub use crate::error::SpotlightError;
pub use crate::pipeline::{
    DepthInput, FrameAcquirer, FrameBuffers, FrameOutcome, FrameSource, SpotlightParams,
    SpotlightPipeline,
};

// Per-frame diagnostics returned by the pipeline.
pub use crate::diagnostics::FrameReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use depth_spotlight::prelude::*;
///
/// # fn main() -> Result<(), SpotlightError> {
/// let geometry = FrameGeometry::new(320, 240, 640, 480)?;
/// let depth = vec![DepthSample::UNKNOWN; geometry.depth_len()];
/// let mut map = Vec::new();
/// geometry.fill_scaled_map(&mut map);
/// let color = BgraImage::new(640, 480);
///
/// let mut pipeline = SpotlightPipeline::new(geometry, SpotlightParams::default())?;
/// let outcome = pipeline.process(Some(DepthInput::new(&depth, &map)), Some(&color))?;
/// if let Some(report) = outcome.report() {
///     println!("accepted={:?} total_ms={:.3}", report.accepted_labels(), report.timings.total_ms);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::depth::{ColorPoint, DepthSample};
    pub use crate::image::{Bgra, BgraImage};
    pub use crate::{
        DepthInput, FrameGeometry, FrameOutcome, SpotlightError, SpotlightParams,
        SpotlightPipeline,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::attenuate::attenuate;
    pub use crate::depth::{register_depth, render_depth_preview, IntensityBuffer};
    pub use crate::diagnostics::{render_debug_overlay, StageTiming, TimingBreakdown};
    pub use crate::edges::{extract_edges, EdgeExtractor};
    pub use crate::regions::{select_regions, AcceptedSet, RegionSelection};
    pub use crate::segments::{thicken_boundaries, RegionSegmenter, Segmentation};
}
