use serde::{Deserialize, Serialize};

/// One named star as written to the catalog files.
///
/// Field order is the serialized key order: `id, ra, dec, magnitude, name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub id: usize,
    /// Right ascension in hours
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    pub magnitude: f64,
    pub name: String,
}

/// Ordered list of accepted stars, in document scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub stars: Vec<StarRecord>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.stars.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}

/// Start of a path element's outline, before projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStart {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl PathStart {
    /// Point after the scale transform is applied
    pub fn scaled(self) -> (f64, f64) {
        (self.x * self.scale, self.y * self.scale)
    }
}

/// Equatorial coordinates: RA in hours, Dec in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub ra: f64,
    pub dec: f64,
}
