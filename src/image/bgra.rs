//! 32-bit BGRA colour pixels stored in a [`Plane`].
use super::plane::Plane;
use serde::Serialize;

/// One colour pixel in sensor byte order (blue, green, red, alpha).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Grey pixel with the given intensity on all three colour channels.
    pub const fn gray(intensity: u8, a: u8) -> Self {
        Self::new(intensity, intensity, intensity, a)
    }
}

/// Colour-resolution BGRA buffer.
pub type BgraImage = Plane<Bgra>;

impl Plane<Bgra> {
    /// Build from packed BGRA bytes (4 bytes per pixel, rows tightly packed).
    pub fn from_bgra_bytes(w: usize, h: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != w * h * 4 {
            return None;
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Bgra::new(px[0], px[1], px[2], px[3]))
            .collect();
        Plane::from_vec(w, h, data)
    }

    /// Overwrite this buffer from packed BGRA bytes without reallocating
    /// when the size is unchanged.
    pub fn copy_from_bgra_bytes(&mut self, w: usize, h: usize, bytes: &[u8]) -> bool {
        if bytes.len() != w * h * 4 {
            return false;
        }
        self.reset(w, h, Bgra::default());
        for (dst, px) in self.data.iter_mut().zip(bytes.chunks_exact(4)) {
            *dst = Bgra::new(px[0], px[1], px[2], px[3]);
        }
        true
    }

    /// Pack as RGBA bytes (the layout expected by PNG encoders).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 4);
        for y in 0..self.h {
            let start = y * self.stride;
            for px in &self.data[start..start + self.w] {
                out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
            }
        }
        out
    }
}
