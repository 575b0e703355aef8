//! Ping-pong frame buffers reused across passes.
//!
//! A pass writes every buffer of the back set from scratch, then the sets
//! swap. Readers only ever see the front set through
//! [`SpotlightPipeline::current`](crate::SpotlightPipeline::current).
use crate::depth::IntensityBuffer;
use crate::image::{BgraImage, GrayImage};
use crate::regions::RegionSelection;
use crate::segments::{LabelMap, Segmentation};

/// Everything one pass produces.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffers {
    /// Registered intensity overlay at colour resolution.
    pub overlay: IntensityBuffer,
    /// Binary edge map after boundary thickening.
    pub edges: GrayImage,
    pub labels: LabelMap,
    pub segmentation: Segmentation,
    pub selection: RegionSelection,
    /// Attenuated colour frame ready for display.
    pub output: BgraImage,
    /// Index of the pass that filled this set; `None` before the first one.
    pub frame_index: Option<u64>,
}

pub(crate) struct DoubleBuffer {
    sets: [FrameBuffers; 2],
    front: usize,
}

impl DoubleBuffer {
    pub(crate) fn new() -> Self {
        Self {
            sets: [FrameBuffers::default(), FrameBuffers::default()],
            front: 0,
        }
    }

    pub(crate) fn front(&self) -> &FrameBuffers {
        &self.sets[self.front]
    }

    /// Borrow the displayed set and the set being written.
    pub(crate) fn split(&mut self) -> (&FrameBuffers, &mut FrameBuffers) {
        let (a, b) = self.sets.split_at_mut(1);
        if self.front == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        }
    }

    pub(crate) fn swap(&mut self) {
        self.front ^= 1;
    }
}
