//! Agreement check between two catalogs.
//!
//! Two extractors run over the same chart should produce the same catalog,
//! except that RA/Dec may differ in the last kept digit depending on how each
//! one breaks rounding ties.

use crate::types::{Catalog, StarRecord};
use std::fmt;

/// Accepted RA/Dec difference: one unit in the fourth decimal
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    Length { left: usize, right: usize },
    Id { index: usize, left: usize, right: usize },
    Name { index: usize, left: String, right: String },
    Magnitude { index: usize, left: f64, right: f64 },
    Ra { index: usize, left: f64, right: f64 },
    Dec { index: usize, left: f64, right: f64 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { left, right } => {
                write!(f, "catalog lengths differ: {left} vs {right}")
            }
            Mismatch::Id { index, left, right } => write!(f, "#{index}: id {left} vs {right}"),
            Mismatch::Name { index, left, right } => {
                write!(f, "#{index}: name {left:?} vs {right:?}")
            }
            Mismatch::Magnitude { index, left, right } => {
                write!(f, "#{index}: magnitude {left} vs {right}")
            }
            Mismatch::Ra { index, left, right } => write!(f, "#{index}: ra {left} vs {right}"),
            Mismatch::Dec { index, left, right } => write!(f, "#{index}: dec {left} vs {right}"),
        }
    }
}

fn within(left: f64, right: f64, tolerance: f64) -> bool {
    // small slack so a one-unit rounding difference is not lost to float error
    (left - right).abs() <= tolerance * (1.0 + 1e-9)
}

fn compare_record(index: usize, l: &StarRecord, r: &StarRecord, tolerance: f64, out: &mut Vec<Mismatch>) {
    if l.id != r.id {
        out.push(Mismatch::Id { index, left: l.id, right: r.id });
    }
    if l.name != r.name {
        out.push(Mismatch::Name {
            index,
            left: l.name.clone(),
            right: r.name.clone(),
        });
    }
    if l.magnitude != r.magnitude {
        out.push(Mismatch::Magnitude { index, left: l.magnitude, right: r.magnitude });
    }
    if !within(l.ra, r.ra, tolerance) {
        out.push(Mismatch::Ra { index, left: l.ra, right: r.ra });
    }
    if !within(l.dec, r.dec, tolerance) {
        out.push(Mismatch::Dec { index, left: l.dec, right: r.dec });
    }
}

/// List every difference between two catalogs, record by record in order.
///
/// An empty result means the catalogs agree.
pub fn compare_catalogs(left: &Catalog, right: &Catalog, tolerance: f64) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    if left.len() != right.len() {
        mismatches.push(Mismatch::Length {
            left: left.len(),
            right: right.len(),
        });
    }
    for (index, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        compare_record(index, l, r, tolerance, &mut mismatches);
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(id: usize, ra: f64, dec: f64, name: &str) -> StarRecord {
        StarRecord {
            id,
            ra,
            dec,
            magnitude: 2.0,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_identical_catalogs_agree() {
        let c = Catalog {
            stars: vec![star(0, 1.0, 2.0, "Vega"), star(1, 3.0, -4.0, "Deneb")],
        };
        assert!(compare_catalogs(&c, &c.clone(), DEFAULT_TOLERANCE).is_empty());
    }

    #[test]
    fn test_last_digit_rounding_is_tolerated() {
        let left = Catalog { stars: vec![star(0, 12.0, 0.0104, "Vega")] };
        let right = Catalog { stars: vec![star(0, 11.9999, 0.0105, "Vega")] };
        assert!(compare_catalogs(&left, &right, DEFAULT_TOLERANCE).is_empty());
    }

    #[test]
    fn test_reports_each_difference() {
        let left = Catalog {
            stars: vec![star(0, 1.0, 2.0, "Vega"), star(1, 3.0, 4.0, "Deneb")],
        };
        let right = Catalog {
            stars: vec![star(0, 1.01, 2.0, "Vega"), star(2, 3.0, 4.0, "Altair")],
        };

        let mismatches = compare_catalogs(&left, &right, DEFAULT_TOLERANCE);
        assert_eq!(mismatches.len(), 3);
        assert!(matches!(mismatches[0], Mismatch::Ra { index: 0, .. }));
        assert!(matches!(mismatches[1], Mismatch::Id { index: 1, left: 1, right: 2 }));
        assert!(matches!(mismatches[2], Mismatch::Name { index: 1, .. }));
        assert_eq!(mismatches[1].to_string(), "#1: id 1 vs 2");
    }

    #[test]
    fn test_length_difference() {
        let left = Catalog { stars: vec![star(0, 1.0, 2.0, "Vega")] };
        let right = Catalog::default();
        assert_eq!(
            compare_catalogs(&left, &right, DEFAULT_TOLERANCE),
            vec![Mismatch::Length { left: 1, right: 0 }]
        );
    }
}
