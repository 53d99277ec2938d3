//! Stargazer catalog extraction.
//!
//! Turns the hand-labeled Inkscape star chart into the JSON star catalog used
//! by the quiz. The whole pipeline is the pure function
//! [`pipeline::extract_catalog`]; [`pipeline::Pipeline::run`] adds the file
//! read and the two atomic catalog writes.

pub mod compare;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod projection;
pub mod storage;
pub mod types;

pub use config::{Config, ExtractionSettings};
pub use error::{CatalogError, Result};
pub use pipeline::{extract_catalog, Pipeline, PipelineResult};
pub use types::{Catalog, StarRecord};
