pub mod error;
pub mod flightlog;
pub mod heatmap;
pub mod layout;
pub mod linecast;
pub mod palette;
#[cfg(feature = "raster")]
pub mod raster;
pub mod readings;

use std::path::Path;

pub use error::{RenderError, Result};
pub use flightlog::{flight_log, flight_log_line};
pub use heatmap::{HeatmapError, PredictionGrid, heatmap_collection};
pub use palette::{MarkerStyle, MarkerSymbol, Rgb};
#[cfg(feature = "raster")]
pub use raster::{PixelFrame, flight_map_image, heatmap_image};
pub use readings::readings_collection;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes pretty-printed JSON, creating parent directories as needed.
pub fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(feature = "raster")]
pub fn write_png(path: &Path, image: &image::RgbaImage) -> Result<()> {
    ensure_parent(path)?;
    image.save(path)?;
    Ok(())
}
