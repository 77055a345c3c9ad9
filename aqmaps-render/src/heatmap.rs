use crate::layout::{GRID_SIZE, border_ring, cell_position_for_index, cell_ring};
use crate::palette::band_color;
use crate::readings::ring_coordinates;
use aqmaps_core::Confinement;
use serde_json::{Value, json};
use std::str::FromStr;
use thiserror::Error;

pub const FILL_OPACITY: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatmapError {
    #[error("expected 10 rows, found {found}")]
    WrongRowCount { found: usize },

    #[error("row {row}: expected 10 values, found {found}")]
    WrongRowLength { row: usize, found: usize },

    #[error("row {row}, column {column}: `{token}` is not an integer")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("row {row}, column {column}: {value} is outside 0..=255")]
    OutOfRange { row: usize, column: usize, value: i64 },
}

/// A 10x10 grid of predicted readings, row 0 being the northern edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionGrid {
    values: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl PredictionGrid {
    pub fn new(values: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { values }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.values.get(row)?.get(column).copied()
    }

    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.values
    }

    /// Values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().flatten().copied()
    }
}

fn parse_row(row: usize, line: &str) -> Result<[u8; GRID_SIZE], HeatmapError> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != GRID_SIZE {
        return Err(HeatmapError::WrongRowLength {
            row,
            found: tokens.len(),
        });
    }

    let mut values = [0u8; GRID_SIZE];
    for (column, token) in tokens.into_iter().enumerate() {
        let value: i64 = token.parse().map_err(|_| HeatmapError::InvalidToken {
            row,
            column,
            token: token.to_string(),
        })?;
        values[column] =
            u8::try_from(value).map_err(|_| HeatmapError::OutOfRange { row, column, value })?;
    }
    Ok(values)
}

impl FromStr for PredictionGrid {
    type Err = HeatmapError;

    /// Blank lines are skipped; every other line must hold ten
    /// comma-separated integers.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != GRID_SIZE {
            return Err(HeatmapError::WrongRowCount { found: lines.len() });
        }

        let mut values = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (row, line) in lines.into_iter().enumerate() {
            values[row] = parse_row(row, line)?;
        }
        Ok(Self { values })
    }
}

/// Border line plus one filled polygon per grid cell.
pub fn heatmap_collection(grid: &PredictionGrid, confinement: &Confinement) -> Value {
    let mut features = Vec::with_capacity(GRID_SIZE * GRID_SIZE + 1);
    features.push(json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "LineString",
            "coordinates": ring_coordinates(&border_ring(confinement)),
        },
    }));

    for (index, value) in grid.iter().enumerate() {
        let ring = cell_ring(confinement, cell_position_for_index(index));
        let color = band_color(f64::from(value)).map(|rgb| rgb.hex()).unwrap_or_default();
        features.push(json!({
            "type": "Feature",
            "properties": {
                "fill-opacity": FILL_OPACITY,
                "rgb-string": color,
                "fill": color,
            },
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring_coordinates(&ring)],
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
