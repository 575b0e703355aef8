//! Flat image buffers with explicit `(width, stride)` addressing.
//!
//! Every stage of the pipeline works on row-major buffers and computes
//! offsets directly (`y * stride + x`). There is no per-pixel dynamic
//! dispatch; the [`ImageView`] traits only expose row slices.

pub mod bgra;
pub mod io;
pub mod plane;
pub mod traits;
pub mod u8;

pub use self::bgra::{Bgra, BgraImage};
pub use self::plane::{GrayImage, ImageF32, Plane};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
