pub mod config;
pub mod date;
pub mod error;
pub mod mission;
pub mod parse;
pub mod source;

pub use config::{AppConfig, OutputConfig, SourceConfig};
pub use date::MissionDate;
pub use error::{AppError, Result};
pub use mission::{
    MissionData, MissionRequest, OutputPaths, fly, load_mission_data, run_mission, summary,
    write_outputs,
};
pub use source::{DirectorySource, HttpSource, MapSource};
