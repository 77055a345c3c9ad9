use aqmaps_core::{Confinement, Coordinate};

/// Cells per side of the prediction grid.
pub const GRID_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

/// Row-major, row 0 along the northern edge.
pub fn cell_position_for_index(index: usize) -> CellPosition {
    CellPosition {
        row: index / GRID_SIZE,
        column: index % GRID_SIZE,
    }
}

pub fn cell_size(confinement: &Confinement) -> (f64, f64) {
    (
        confinement.width() / GRID_SIZE as f64,
        confinement.height() / GRID_SIZE as f64,
    )
}

/// Closed ring of a grid cell, clockwise from its north-west corner.
pub fn cell_ring(confinement: &Confinement, cell: CellPosition) -> [Coordinate; 5] {
    let (width, height) = cell_size(confinement);
    let west = confinement.min_lng + cell.column as f64 * width;
    let north = confinement.max_lat - cell.row as f64 * height;
    let north_west = Coordinate::new(west, north);

    [
        north_west,
        Coordinate::new(west + width, north),
        Coordinate::new(west + width, north - height),
        Coordinate::new(west, north - height),
        north_west,
    ]
}

/// Closed ring around the whole confinement zone.
pub fn border_ring(confinement: &Confinement) -> [Coordinate; 5] {
    let [north_west, north_east, south_east, south_west] = confinement.corners();
    [north_west, north_east, south_east, south_west, north_west]
}
