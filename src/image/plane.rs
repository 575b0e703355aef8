//! Owned single-channel buffer in row-major layout (stride == width).
//!
//! `Plane<u8>` backs the intensity, edge and label buffers; `Plane<f32>`
//! holds gradients. Buffers can be resized in place so the pipeline reuses
//! allocations across frames.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// 8-bit grayscale plane.
pub type GrayImage = Plane<u8>;
/// Float plane used for gradients.
pub type ImageF32 = Plane<f32>;

impl<T: Copy> Plane<T> {
    /// Construct a `w × h` buffer with every pixel set to `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap existing row-major data. Returns `None` if the length does not
    /// match `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    /// Linear index for signed coordinates, `None` when outside the image.
    #[inline]
    pub fn checked_idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.w as i64 || y >= self.h as i64 {
            return None;
        }
        Some(self.idx(x as usize, y as usize))
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Resize to `w × h` and overwrite every pixel with `value`, keeping the
    /// allocation when the size is unchanged.
    pub fn reset(&mut self, w: usize, h: usize, value: T) {
        self.w = w;
        self.h = h;
        self.stride = w;
        self.data.clear();
        self.data.resize(w * h, value);
    }

    /// Overwrite this plane with the contents of `other`, resizing if needed.
    pub fn copy_from(&mut self, other: &Plane<T>) {
        self.w = other.w;
        self.h = other.h;
        self.stride = other.stride;
        self.data.clear();
        self.data.extend_from_slice(&other.data);
    }
}

impl<T: Copy + Default> Plane<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy + Default> Default for Plane<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Plane<u8> {
    /// Borrow as a read-only [`ImageU8`](super::ImageU8) view.
    pub fn as_view(&self) -> super::ImageU8<'_> {
        super::ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl<T: Copy> ImageView for Plane<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> ImageViewMut for Plane<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
