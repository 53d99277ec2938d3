//! Chart pixel space to equatorial coordinates.
//!
//! The chart is an equirectangular (plate carrée) layout: x runs linearly over
//! 0..24 h of right ascension and y runs linearly from +90° at the top edge to
//! -90° at the bottom.

use crate::constants::{COORD_DECIMALS, SVG_HEIGHT, SVG_WIDTH, TILE_COLUMNS, TILE_ROWS};
use crate::types::{Equatorial, PathStart};
use serde::Deserialize;

/// Document dimensions of the chart
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: SVG_WIDTH,
            height: SVG_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Project a path start to RA (hours) and Dec (degrees), rounded to four decimals.
    pub fn to_equatorial(self, start: PathStart) -> Equatorial {
        let (scaled_x, scaled_y) = start.scaled();
        let half_height = self.height / 2.0;

        let ra = (scaled_x / self.width) * 24.0;
        let dec = (half_height - scaled_y) / half_height * 90.0;

        Equatorial {
            ra: round_to(ra, COORD_DECIMALS),
            dec: round_to(dec, COORD_DECIMALS),
        }
    }

    /// Tile index in the 4 x 3 grid, row-major from the top-left corner.
    ///
    /// Points off the chart are clamped into the nearest edge tile.
    pub fn tile_of(self, start: PathStart) -> usize {
        let (scaled_x, scaled_y) = start.scaled();

        let tile_x = grid_cell(scaled_x, self.width / TILE_COLUMNS as f64, TILE_COLUMNS);
        let tile_y = grid_cell(scaled_y, self.height / TILE_ROWS as f64, TILE_ROWS);
        tile_y * TILE_COLUMNS + tile_x
    }
}

fn grid_cell(value: f64, cell_size: f64, cells: usize) -> usize {
    let cell = (value / cell_size).floor();
    if cell.is_nan() || cell < 0.0 {
        0
    } else {
        (cell as usize).min(cells - 1)
    }
}

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
