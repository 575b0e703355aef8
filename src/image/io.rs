//! File I/O for the demo tool: PNG frames in, PNG renders and JSON out.
//!
//! - `load_depth_png`: 16-bit grey PNG holding millimetres per pixel.
//! - `load_color_png`: any colour image, converted to BGRA.
//! - `save_gray_png` / `save_bgra_png`: write owned buffers to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BgraImage, GrayImage, ImageView, Plane};
use crate::depth::DepthSample;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a 16-bit depth PNG. Zero stays "no reading"; values beyond the
/// sample range saturate.
pub fn load_depth_png(path: &Path) -> Result<Plane<DepthSample>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let samples = img
        .into_raw()
        .into_iter()
        .map(|mm| DepthSample::from_millimetres(mm.min(i16::MAX as u16) as i16))
        .collect();
    Plane::from_vec(w, h, samples)
        .ok_or_else(|| format!("Depth image {} has an inconsistent size", path.display()))
}

/// Load a colour image as BGRA.
pub fn load_color_png(path: &Path) -> Result<BgraImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut bytes = img.into_raw();
    for px in bytes.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    BgraImage::from_bgra_bytes(w, h, &bytes)
        .ok_or_else(|| format!("Colour image {} has an inconsistent size", path.display()))
}

/// Save an 8-bit grey buffer to a PNG.
pub fn save_gray_png(buffer: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut data = Vec::with_capacity(buffer.w * buffer.h);
    for row in buffer.rows() {
        data.extend_from_slice(row);
    }
    let out = image::GrayImage::from_raw(buffer.w as u32, buffer.h as u32, data)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a BGRA buffer to an RGBA PNG.
pub fn save_bgra_png(buffer: &BgraImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = image::RgbaImage::from_raw(
        buffer.w as u32,
        buffer.h as u32,
        buffer.to_rgba_bytes(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
