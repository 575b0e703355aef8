//! Region filtering: bounding boxes and the accepted label set.
//!
//! Two independent thresholds act on every region with at least
//! `min_samples` grid samples:
//!
//! - the box filter drops bounding boxes wider or taller than
//!   `max_box_fraction` of the frame (the single giant background region);
//! - the acceptance band keeps labels whose sample count is below
//!   `max_accepted_samples`. Accepted labels stay fully opaque downstream.
//!
//! A label may be boxed without being accepted and vice versa. Both outputs
//! are rebuilt from scratch every frame.

mod accepted;
mod filter;

pub use accepted::AcceptedSet;
pub use filter::{select_regions, RegionBox, RegionFilterOptions, RegionSelection};
