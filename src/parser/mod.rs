//! Pattern-based extraction of star elements from the chart SVG.
//!
//! The chart is only ever scanned textually: the tags we care about have a
//! fixed, predictable shape, so each stage pulls one attribute out with a
//! targeted regex instead of building a document tree.
//!
//! - [`scanner`] finds self-closing `<path … />` tags that carry an Inkscape label
//! - [`name`] turns a label into a proper name, or rejects it
//! - [`path`] reads the outline's starting point and the optional scale

pub mod name;
pub mod path;
pub mod scanner;

pub use name::{extract_name, is_valid_name, NameRules};
pub use path::{decode_path, extract_scale};
pub use scanner::{scan_elements, LabeledElement};
