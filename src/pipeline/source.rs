//! Acquisition of frame pairs from a sensor.
//!
//! The sensor is abstracted as a [`FrameSource`] handing out frame handles.
//! A handle owns a device buffer until it is dropped, so [`FrameAcquirer`]
//! copies pixels into its own staging buffers and drops every handle before
//! the pipeline starts on the copy.
use super::spotlight::{DepthInput, FrameOutcome, SpotlightPipeline};
use crate::depth::{ColorPoint, DepthSample};
use crate::error::SpotlightError;
use crate::image::BgraImage;
use log::debug;

/// Device-owned depth frame. Dropping it returns the buffer to the device.
pub trait DepthFrame {
    /// Copy samples (player-index bits already stripped) into `out`.
    /// Returns `false` when the device could not provide the data.
    fn copy_samples(&self, out: &mut Vec<DepthSample>) -> bool;
}

/// Device-owned colour frame. Dropping it returns the buffer to the device.
pub trait ColorFrame {
    /// Copy BGRA pixels into `out`. Returns `false` when the copy failed.
    fn copy_pixels(&self, out: &mut BgraImage) -> bool;
}

/// Sensor collaborator producing frames at its own cadence.
pub trait FrameSource {
    type Depth: DepthFrame;
    type Color: ColorFrame;

    /// Next depth frame, or `None` when none is ready this cycle.
    fn open_depth_frame(&mut self) -> Option<Self::Depth>;

    /// Next colour frame, or `None` when none is ready this cycle.
    fn open_color_frame(&mut self) -> Option<Self::Color>;

    /// Fill `out` with the colour coordinate of every depth sample using the
    /// device calibration. Returns `false` when no mapping is available.
    fn map_depth_to_color(&mut self, depth: &[DepthSample], out: &mut Vec<ColorPoint>) -> bool;
}

/// Staging buffers for one frame pair.
#[derive(Default)]
pub struct FrameAcquirer {
    depth: Vec<DepthSample>,
    color_map: Vec<ColorPoint>,
    color: BgraImage,
}

impl FrameAcquirer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire whatever frames `source` has ready and run one pipeline pass.
    pub fn run_cycle<S: FrameSource>(
        &mut self,
        source: &mut S,
        pipeline: &mut SpotlightPipeline,
    ) -> Result<FrameOutcome, SpotlightError> {
        let have_depth = self.acquire_depth(source);
        let have_color = self.acquire_color(source);
        debug!(
            "FrameAcquirer::run_cycle depth={} color={}",
            have_depth, have_color
        );
        let depth = have_depth.then(|| DepthInput::new(&self.depth, &self.color_map));
        let color = have_color.then_some(&self.color);
        pipeline.process(depth, color)
    }

    fn acquire_depth<S: FrameSource>(&mut self, source: &mut S) -> bool {
        let copied = match source.open_depth_frame() {
            Some(frame) => frame.copy_samples(&mut self.depth),
            None => return false,
        };
        copied && source.map_depth_to_color(&self.depth, &mut self.color_map)
    }

    fn acquire_color<S: FrameSource>(&mut self, source: &mut S) -> bool {
        match source.open_color_frame() {
            Some(frame) => frame.copy_pixels(&mut self.color),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::FrameGeometry;
    use crate::pipeline::SpotlightParams;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle {
        outstanding: Rc<Cell<usize>>,
        fail_copy: bool,
    }

    impl Handle {
        fn open(outstanding: &Rc<Cell<usize>>, fail_copy: bool) -> Self {
            outstanding.set(outstanding.get() + 1);
            Self {
                outstanding: Rc::clone(outstanding),
                fail_copy,
            }
        }
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.outstanding.set(self.outstanding.get() - 1);
        }
    }

    impl DepthFrame for Handle {
        fn copy_samples(&self, out: &mut Vec<DepthSample>) -> bool {
            out.clear();
            out.resize(8 * 6, DepthSample::from_millimetres(1500));
            !self.fail_copy
        }
    }

    impl ColorFrame for Handle {
        fn copy_pixels(&self, out: &mut BgraImage) -> bool {
            let bytes = [1u8, 2, 3, 200].repeat(16 * 12);
            out.copy_from_bgra_bytes(16, 12, &bytes) && !self.fail_copy
        }
    }

    struct MockSource {
        geometry: FrameGeometry,
        outstanding: Rc<Cell<usize>>,
        depth_ready: bool,
        color_ready: bool,
        fail_depth_copy: bool,
        outstanding_at_mapping: Option<usize>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                geometry: FrameGeometry::new(8, 6, 16, 12).expect("valid geometry"),
                outstanding: Rc::new(Cell::new(0)),
                depth_ready: true,
                color_ready: true,
                fail_depth_copy: false,
                outstanding_at_mapping: None,
            }
        }
    }

    impl FrameSource for MockSource {
        type Depth = Handle;
        type Color = Handle;

        fn open_depth_frame(&mut self) -> Option<Handle> {
            self.depth_ready
                .then(|| Handle::open(&self.outstanding, self.fail_depth_copy))
        }

        fn open_color_frame(&mut self) -> Option<Handle> {
            self.color_ready
                .then(|| Handle::open(&self.outstanding, false))
        }

        fn map_depth_to_color(&mut self, _depth: &[DepthSample], out: &mut Vec<ColorPoint>) -> bool {
            self.outstanding_at_mapping = Some(self.outstanding.get());
            self.geometry.fill_scaled_map(out);
            true
        }
    }

    fn pipeline(source: &MockSource) -> SpotlightPipeline {
        SpotlightPipeline::new(source.geometry, SpotlightParams::default()).expect("valid")
    }

    #[test]
    fn handles_are_released_before_processing() {
        let mut source = MockSource::new();
        let mut p = pipeline(&source);
        let mut acquirer = FrameAcquirer::new();
        let outcome = acquirer.run_cycle(&mut source, &mut p).expect("pass runs");
        assert!(!outcome.is_skipped());
        assert_eq!(source.outstanding_at_mapping, Some(0));
        assert_eq!(source.outstanding.get(), 0);
        assert!(outcome.report().expect("processed").color_attenuated);
        let px = p.current().output.get(5, 5);
        assert_eq!((px.b, px.g, px.r), (1, 2, 3));
        assert_eq!((p.current().output.w, p.current().output.h), (16, 12));
    }

    #[test]
    fn unavailable_depth_skips_the_cycle() {
        let mut source = MockSource::new();
        source.depth_ready = false;
        let mut p = pipeline(&source);
        let outcome = FrameAcquirer::new()
            .run_cycle(&mut source, &mut p)
            .expect("skip is not an error");
        assert!(outcome.is_skipped());
        assert_eq!(source.outstanding.get(), 0);
    }

    #[test]
    fn failed_depth_copy_skips_the_cycle() {
        let mut source = MockSource::new();
        source.fail_depth_copy = true;
        let mut p = pipeline(&source);
        let outcome = FrameAcquirer::new()
            .run_cycle(&mut source, &mut p)
            .expect("skip is not an error");
        assert!(outcome.is_skipped());
        assert!(source.outstanding_at_mapping.is_none());
    }

    #[test]
    fn depth_without_color_still_runs() {
        let mut source = MockSource::new();
        source.color_ready = false;
        let mut p = pipeline(&source);
        let outcome = FrameAcquirer::new()
            .run_cycle(&mut source, &mut p)
            .expect("depth-only pass");
        assert!(!outcome.report().expect("processed").color_attenuated);
    }
}
