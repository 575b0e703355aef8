use depth_spotlight::config::spotlight;
use depth_spotlight::depth::{render_depth_preview, FrameGeometry};
use depth_spotlight::diagnostics::render_debug_overlay;
use depth_spotlight::image::io::{
    load_color_png, load_depth_png, save_bgra_png, save_gray_png, write_json_file,
};
use depth_spotlight::image::{BgraImage, GrayImage};
use depth_spotlight::{DepthInput, FrameOutcome, SpotlightPipeline};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = spotlight::load_config(Path::new(&config_path))?;

    let depth = load_depth_png(&config.depth_png)?;
    let color = config
        .color_png
        .as_deref()
        .map(load_color_png)
        .transpose()?;
    let (color_w, color_h) = color
        .as_ref()
        .map_or((depth.w, depth.h), |c| (c.w, c.h));

    let geometry = FrameGeometry::new(depth.w, depth.h, color_w, color_h)
        .map_err(|e| format!("Invalid frame geometry: {e}"))?;
    let mut color_map = Vec::new();
    geometry.fill_scaled_map(&mut color_map);

    let mut pipeline = SpotlightPipeline::new(geometry, config.params)
        .map_err(|e| format!("Invalid parameters: {e}"))?;
    let outcome = pipeline
        .process(
            Some(DepthInput::new(&depth.data, &color_map)),
            color.as_ref(),
        )
        .map_err(|e| format!("Processing failed: {e}"))?;
    let FrameOutcome::Processed(report) = outcome else {
        return Err("Pipeline skipped the frame".to_string());
    };

    write_json_file(&config.output.report_json, &report)?;
    println!(
        "Saved report to {} ({} regions, {} boxes, {} accepted)",
        config.output.report_json.display(),
        report.regions.len(),
        report.boxes.len(),
        report.accepted.len()
    );

    let frame = pipeline.current();
    if let Some(path) = &config.output.spotlight_image {
        if report.color_attenuated {
            save_bgra_png(&frame.output, path)?;
            println!("Saved spotlight image to {}", path.display());
        } else {
            println!("No colour frame; skipping {}", path.display());
        }
    }
    if let Some(path) = &config.output.overlay_image {
        let mut rendered = BgraImage::default();
        frame.overlay.render_bgra(&mut rendered);
        save_bgra_png(&rendered, path)?;
        println!("Saved intensity overlay to {}", path.display());
    }
    if let Some(path) = &config.output.debug_image {
        let mut debug = GrayImage::default();
        render_debug_overlay(&frame.labels, &frame.selection.boxes, &mut debug);
        save_gray_png(&debug, path)?;
        println!("Saved debug overlay to {}", path.display());
    }
    if let Some(path) = &config.output.preview_image {
        let mut preview = BgraImage::default();
        render_depth_preview(&depth.data, &geometry, &mut preview)
            .map_err(|e| format!("Preview failed: {e}"))?;
        save_bgra_png(&preview, path)?;
        println!("Saved depth preview to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: spotlight <config.json>".to_string()
}
