//! Per-frame diagnostics: a serialisable report and a debug visualisation.
//!
//! [`FrameReport`] is returned by every processed pass of the pipeline and
//! summarises what each stage produced together with its timing.
//! [`render_debug_overlay`] draws the label map and the accepted boxes into
//! a grey image for inspection.

pub mod overlay;
pub mod report;
pub mod timing;

pub use overlay::{render_debug_overlay, BOX_GRAY, BOX_THICKNESS};
pub use report::{FrameReport, InputDescriptor, RegionSummary};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
