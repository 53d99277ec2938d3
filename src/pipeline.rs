use crate::config::ExtractionSettings;
use crate::constants::{PLACEHOLDER_MAGNITUDE, TILE_COLUMNS, TILE_ROWS};
use crate::error::{CatalogError, Result};
use crate::parser::{decode_path, scan_elements, LabeledElement};
use crate::storage::{write_catalog, WrittenFile};
use crate::types::{Catalog, Equatorial, PathStart, StarRecord};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

/// A star accepted from the chart, before it gets its id
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedStar {
    pub name: String,
    pub start: PathStart,
    pub position: Equatorial,
}

/// Assigns contiguous ids in acceptance order and collects the records.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    next_id: usize,
    stars: Vec<StarRecord>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the id it was given
    pub fn push(&mut self, ra: f64, dec: f64, magnitude: f64, name: String) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.stars.push(StarRecord {
            id,
            ra,
            dec,
            magnitude,
            name,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn finish(self) -> Catalog {
        Catalog { stars: self.stars }
    }
}

/// Run name extraction, path decoding and projection on one scanned element.
///
/// `None` means the element is silently left out of the catalog.
pub fn accept_element(
    element: &LabeledElement<'_>,
    settings: &ExtractionSettings,
) -> Option<AcceptedStar> {
    let Some(name) = settings.names.accept(element.label) else {
        trace!(offset = element.offset, label = element.label, "label has no usable name");
        return None;
    };
    let Some(start) = decode_path(element.tag) else {
        trace!(offset = element.offset, name = %name, "path data not decodable");
        return None;
    };
    let position = settings.viewport.to_equatorial(start);
    if !(position.ra.is_finite() && position.dec.is_finite()) {
        trace!(offset = element.offset, name = %name, "projection is not finite");
        return None;
    }
    Some(AcceptedStar { name, start, position })
}

/// Accepted stars in document order. Both the catalog and the tile report read from this.
pub fn accepted_stars<'a>(
    text: &'a str,
    settings: &'a ExtractionSettings,
) -> impl Iterator<Item = AcceptedStar> + 'a {
    scan_elements(text).filter_map(move |element| accept_element(&element, settings))
}

/// Scan the chart and build the catalog. Pure: text in, catalog out.
pub fn extract_catalog(text: &str, settings: &ExtractionSettings) -> Catalog {
    let mut builder = CatalogBuilder::new();

    for star in accepted_stars(text, settings) {
        let Equatorial { ra, dec } = star.position;
        let id = builder.push(ra, dec, PLACEHOLDER_MAGNITUDE, star.name);
        trace!(id = id, ra = ra, dec = dec, "accepted star");
    }

    debug!("Accepted {} stars", builder.len());
    builder.finish()
}

/// Per-tile star counts for the 4 x 3 chart grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileStats {
    pub total: usize,
    pub per_tile: Vec<usize>,
}

impl TileStats {
    pub fn count(&self, row: usize, col: usize) -> usize {
        self.per_tile[row * TILE_COLUMNS + col]
    }
}

/// Count accepted stars per chart tile, same acceptance rules as [`extract_catalog`].
pub fn tile_stats(text: &str, settings: &ExtractionSettings) -> TileStats {
    let mut per_tile = vec![0usize; TILE_COLUMNS * TILE_ROWS];
    let mut total = 0;

    for star in accepted_stars(text, settings) {
        per_tile[settings.viewport.tile_of(star.start)] += 1;
        total += 1;
    }

    TileStats { total, per_tile }
}

/// Read the whole chart into memory.
pub fn read_chart(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input: PathBuf,
    pub total_stars: usize,
    pub compact: WrittenFile,
    pub pretty: WrittenFile,
}

pub struct Pipeline;

impl Pipeline {
    /// Read the chart, extract the catalog and write both JSON forms.
    ///
    /// Nothing is written if the input cannot be read.
    #[instrument(skip_all, fields(input = %input.display()))]
    pub fn run(
        input: &Path,
        compact_output: &Path,
        pretty_output: &Path,
        settings: &ExtractionSettings,
    ) -> Result<PipelineResult> {
        info!("📖 Reading chart {}", input.display());
        let text = read_chart(input)?;
        info!("Read {} bytes", text.len());

        let catalog = extract_catalog(&text, settings);
        info!("✅ Extracted {} stars", catalog.len());

        let (compact, pretty) = write_catalog(&catalog, compact_output, pretty_output)?;
        info!("💾 Saved {} ({})", compact.path.display(), compact.sha256);
        info!("💾 Saved {} ({})", pretty.path.display(), pretty.sha256);

        Ok(PipelineResult {
            input: input.to_path_buf(),
            total_stars: catalog.len(),
            compact,
            pretty,
        })
    }
}
