use depth_spotlight::depth::{ColorPoint, DepthSample};
use depth_spotlight::image::{Bgra, BgraImage};
use depth_spotlight::FrameGeometry;

/// Square block of constant distance in a depth frame.
#[derive(Clone, Copy, Debug)]
pub struct Block {
    pub x0: usize,
    pub y0: usize,
    pub size: usize,
    pub mm: i16,
}

impl Block {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x0 + self.size && y >= self.y0 && y < self.y0 + self.size
    }
}

/// Depth frame that is unknown everywhere except inside `blocks`.
pub fn depth_with_blocks(geometry: &FrameGeometry, blocks: &[Block]) -> Vec<DepthSample> {
    let (w, h) = (geometry.depth_width(), geometry.depth_height());
    let mut depth = vec![DepthSample::UNKNOWN; w * h];
    for y in 0..h {
        for x in 0..w {
            if let Some(block) = blocks.iter().find(|b| b.contains(x, y)) {
                depth[y * w + x] = DepthSample::from_millimetres(block.mm);
            }
        }
    }
    depth
}

/// Depth frame that is unknown everywhere except a square whose distance
/// grows by `step_mm` per column from `block.mm`.
pub fn depth_with_ramp(geometry: &FrameGeometry, block: Block, step_mm: i16) -> Vec<DepthSample> {
    let w = geometry.depth_width();
    let mut depth = vec![DepthSample::UNKNOWN; geometry.depth_len()];
    for y in block.y0..block.y0 + block.size {
        for x in block.x0..block.x0 + block.size {
            let mm = block.mm + (x - block.x0) as i16 * step_mm;
            depth[y * w + x] = DepthSample::from_millimetres(mm);
        }
    }
    depth
}

pub fn scaled_map(geometry: &FrameGeometry) -> Vec<ColorPoint> {
    let mut map = Vec::new();
    geometry.fill_scaled_map(&mut map);
    map
}

pub fn uniform_color(geometry: &FrameGeometry, px: Bgra) -> BgraImage {
    BgraImage::filled(geometry.color_width(), geometry.color_height(), px)
}
