use std::error::Error;
use std::path::PathBuf;

use aqmaps_core::Confinement;
use aqmaps_render::{PredictionGrid, heatmap_collection, write_json};
use clap::Parser;

/// Renders a 10x10 grid of predicted readings as a GeoJSON heat-map.
#[derive(Parser, Debug)]
#[command(name = "aqmaps-heatmap", version)]
struct Args {
    /// Text file of ten rows of ten comma-separated integers in 0..=255.
    predictions: PathBuf,

    /// GeoJSON output path.
    #[arg(short, long, default_value = "heatmap.geojson")]
    output: PathBuf,

    /// Also write a raster image of the grid.
    #[cfg(feature = "raster")]
    #[arg(long)]
    png: Option<PathBuf>,

    /// Pixels per grid cell in the raster image.
    #[cfg(feature = "raster")]
    #[arg(long, default_value_t = 32)]
    cell_pixels: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.predictions)?;
    let grid: PredictionGrid = text.parse()?;

    write_json(&args.output, &heatmap_collection(&grid, &Confinement::default()))?;
    println!("wrote {}", args.output.display());

    #[cfg(feature = "raster")]
    {
        if let Some(path) = &args.png {
            let image = aqmaps_render::heatmap_image(&grid, args.cell_pixels);
            aqmaps_render::write_png(path, &image)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
