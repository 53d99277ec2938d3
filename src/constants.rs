/// Chart constants shared by the extractor, the CLI and the tests.
/// Dimensions are in Inkscape document units of the source star chart.

pub const SVG_WIDTH: f64 = 2010.7097;
pub const SVG_HEIGHT: f64 = 1122.5203;

/// Every extracted star gets this magnitude until real photometry is wired in.
pub const PLACEHOLDER_MAGNITUDE: f64 = 2.0;

/// Decimal digits kept on RA/Dec
pub const COORD_DECIMALS: i32 = 4;

// Tile grid used by the stats report
pub const TILE_COLUMNS: usize = 4;
pub const TILE_ROWS: usize = 3;

// Default file locations, relative to the working directory
pub const DEFAULT_INPUT: &str = "data/stars.svg";
pub const DEFAULT_COMPACT_OUTPUT: &str = "data/stars.json";
pub const DEFAULT_PRETTY_OUTPUT: &str = "data/stars_pretty.json";
pub const DEFAULT_CONFIG: &str = "stargazer.toml";

/// Layer and legend labels on the chart that look like names but are not stars.
pub const EXCLUDED_NAMES: &[&str] = &[
    "Grids", "Source", "Legend", "Border", "Axis", "Ecliptic", "Equator",
];

/// Get the excluded names as owned strings (config default)
pub fn default_excluded_names() -> Vec<String> {
    EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect()
}
