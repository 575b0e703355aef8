//! Per-frame orchestration of the spotlight stages.
//!
//! Overview
//! - [`SpotlightPipeline`] runs registration → edges → segmentation →
//!   region filter → attenuation on one frame pair at a time, writing into
//!   the back half of a ping-pong buffer pair and swapping at the end.
//! - Passes are gated on frame availability: without depth nothing runs;
//!   with depth only, boxes and regions refresh while the previous colour
//!   output is carried forward.
//! - [`FrameAcquirer`] pulls frames from a [`FrameSource`], copies them into
//!   staging buffers and releases the device handles before processing.
//!
//! Modules
//! - [`params`] – configuration types for every stage.
//! - `spotlight` – the [`SpotlightPipeline`] implementation.
//! - `source` – sensor abstraction and acquisition.
//! - `workspace` – the reusable frame buffers.

pub mod params;
mod source;
mod spotlight;
mod workspace;

pub use params::SpotlightParams;
pub use source::{ColorFrame, DepthFrame, FrameAcquirer, FrameSource};
pub use spotlight::{DepthInput, FrameOutcome, SpotlightPipeline};
pub use workspace::FrameBuffers;
