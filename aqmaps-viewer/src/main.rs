use aqmaps_viewer_lib::{DEFAULT_REPORT_PATH, load_report, run};
use std::path::PathBuf;

#[macroquad::main("aqmaps viewer")]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH), PathBuf::from);

    match load_report(&path) {
        Ok(report) => run(report).await,
        Err(err) => eprintln!("failed to load {}: {}", path.display(), err),
    }
}
