//! Frame pipeline driving registration through attenuation.
//!
//! Typical usage:
//! ```no_run
//! use depth_spotlight::{DepthInput, FrameGeometry, FrameOutcome, SpotlightParams, SpotlightPipeline};
//! use depth_spotlight::depth::{ColorPoint, DepthSample};
//! use depth_spotlight::image::BgraImage;
//!
//! # fn example(depth: &[DepthSample], map: &[ColorPoint], color: &BgraImage) -> Result<(), depth_spotlight::SpotlightError> {
//! let geometry = FrameGeometry::new(320, 240, 640, 480)?;
//! let mut pipeline = SpotlightPipeline::new(geometry, SpotlightParams::default())?;
//! let input = DepthInput::new(depth, map);
//! if let FrameOutcome::Processed(report) = pipeline.process(Some(input), Some(color))? {
//!     println!("{} boxes", report.boxes.len());
//! }
//! let display = &pipeline.current().output;
//! # let _ = display;
//! # Ok(())
//! # }
//! ```
use super::params::SpotlightParams;
use super::workspace::{DoubleBuffer, FrameBuffers};
use crate::attenuate::attenuate;
use crate::depth::{register_depth, ColorPoint, DepthSample, FrameGeometry};
use crate::diagnostics::{FrameReport, TimingBreakdown};
use crate::edges::EdgeExtractor;
use crate::error::SpotlightError;
use crate::image::BgraImage;
use crate::regions::select_regions;
use crate::segments::RegionSegmenter;
use log::debug;
use std::time::Instant;

/// Depth half of a frame pair: samples plus their colour-space coordinates.
#[derive(Clone, Copy, Debug)]
pub struct DepthInput<'a> {
    pub samples: &'a [DepthSample],
    pub color_map: &'a [ColorPoint],
}

impl<'a> DepthInput<'a> {
    pub fn new(samples: &'a [DepthSample], color_map: &'a [ColorPoint]) -> Self {
        Self { samples, color_map }
    }
}

/// What a call to [`SpotlightPipeline::process`] did.
#[derive(Clone, Debug)]
pub enum FrameOutcome {
    /// No depth frame: nothing ran and the previous output stays current.
    Skipped,
    Processed(FrameReport),
}

impl FrameOutcome {
    pub fn report(&self) -> Option<&FrameReport> {
        match self {
            FrameOutcome::Skipped => None,
            FrameOutcome::Processed(report) => Some(report),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FrameOutcome::Skipped)
    }
}

/// Single-threaded, frame-synchronous spotlight pipeline.
pub struct SpotlightPipeline {
    geometry: FrameGeometry,
    params: SpotlightParams,
    edges: EdgeExtractor,
    segmenter: RegionSegmenter,
    buffers: DoubleBuffer,
    frames_processed: u64,
}

impl SpotlightPipeline {
    /// Create a pipeline for fixed frame geometry. Invalid parameters are
    /// reported here, before any frame is processed.
    pub fn new(geometry: FrameGeometry, params: SpotlightParams) -> Result<Self, SpotlightError> {
        params.validate()?;
        Ok(Self {
            geometry,
            params,
            edges: EdgeExtractor::new(params.edges),
            segmenter: RegionSegmenter::new(params.segments),
            buffers: DoubleBuffer::new(),
            frames_processed: 0,
        })
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn params(&self) -> &SpotlightParams {
        &self.params
    }

    /// Number of passes that ran (skipped calls are not counted).
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Buffers of the most recent completed pass.
    pub fn current(&self) -> &FrameBuffers {
        self.buffers.front()
    }

    /// Run one pass over whatever halves of the frame pair are available.
    ///
    /// - no depth: the pass is skipped and the current buffers stay on display;
    /// - depth only: regions and boxes are refreshed, the previous colour
    ///   output is carried forward unchanged;
    /// - depth and colour: the full pipeline runs, including attenuation.
    ///
    /// Buffer length mismatches are reported before any buffer is written.
    pub fn process(
        &mut self,
        depth: Option<DepthInput<'_>>,
        color: Option<&BgraImage>,
    ) -> Result<FrameOutcome, SpotlightError> {
        let Some(depth) = depth else {
            debug!("SpotlightPipeline::process skipped: no depth frame");
            return Ok(FrameOutcome::Skipped);
        };
        let g = self.geometry;
        SpotlightError::check_len("depth", g.depth_len(), depth.samples.len())?;
        SpotlightError::check_len("depth-to-color map", g.depth_len(), depth.color_map.len())?;
        if let Some(color) = color {
            SpotlightError::check_len("color", g.color_len(), color.w * color.h)?;
            SpotlightError::check_len("color row", g.color_width(), color.w)?;
        }

        let frame_index = self.frames_processed;
        debug!(
            "SpotlightPipeline::process start frame={} color={}",
            frame_index,
            color.is_some()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let (front, back) = self.buffers.split();

        let stage = Instant::now();
        let registered = register_depth(
            depth.samples,
            depth.color_map,
            &g,
            &self.params.registration,
            &mut back.overlay,
        )?;
        let ms = timings.record_since("registration", stage);
        debug!("registration: {} pixels in {:.3} ms", registered, ms);

        let stage = Instant::now();
        self.edges
            .extract(back.overlay.intensity.as_view(), &mut back.edges);
        let ms = timings.record_since("edges", stage);
        debug!("edges: {:.3} ms", ms);

        let stage = Instant::now();
        self.segmenter
            .segment(&mut back.edges, &mut back.labels, &mut back.segmentation);
        timings.record_since("segmentation", stage);
        let edge_pixels = back.edges.count_nonzero();

        let stage = Instant::now();
        back.selection = select_regions(
            &back.segmentation,
            back.labels.w,
            back.labels.h,
            &self.params.regions,
        );
        let ms = timings.record_since("region_filter", stage);
        debug!(
            "region filter: {} boxes, {} accepted in {:.3} ms",
            back.selection.boxes.len(),
            back.selection.accepted.len(),
            ms
        );

        let color_attenuated = match color {
            Some(color) => {
                let stage = Instant::now();
                attenuate(
                    color,
                    &back.labels,
                    &back.selection.accepted,
                    self.params.attenuation_downscale,
                    &mut back.output,
                )?;
                timings.record_since("attenuation", stage);
                true
            }
            None => {
                back.output.copy_from(&front.output);
                false
            }
        };
        back.frame_index = Some(frame_index);

        timings.total_ms = crate::diagnostics::elapsed_ms(total_start);
        let report = FrameReport::new(
            frame_index,
            &g,
            registered,
            edge_pixels,
            &back.segmentation,
            &back.selection,
            color_attenuated,
            timings,
        );
        self.buffers.swap();
        self.frames_processed += 1;
        debug!(
            "SpotlightPipeline::process done frame={} total={:.3} ms",
            frame_index, report.timings.total_ms
        );
        Ok(FrameOutcome::Processed(report))
    }
}
