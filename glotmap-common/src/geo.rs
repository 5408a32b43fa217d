//! Geographic primitives shared between the dataset model and the viewer

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, degrees, both finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned bounding box over positions
///
/// Invariant: `south <= north` and `west <= east`. A `Bounds` is never
/// empty; the empty case is represented as `Option<Bounds>` (see
/// [`Bounds::enclosing`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// A degenerate box containing exactly one position
    pub fn of(position: LatLng) -> Self {
        Self {
            south: position.lat,
            west: position.lng,
            north: position.lat,
            east: position.lng,
        }
    }

    /// Grow the box to include `position`
    pub fn extend(&mut self, position: LatLng) {
        self.south = self.south.min(position.lat);
        self.north = self.north.max(position.lat);
        self.west = self.west.min(position.lng);
        self.east = self.east.max(position.lng);
    }

    /// Whether `position` lies inside the box (edges inclusive)
    pub fn contains(&self, position: LatLng) -> bool {
        position.lat >= self.south
            && position.lat <= self.north
            && position.lng >= self.west
            && position.lng <= self.east
    }

    /// The smallest box enclosing every position in the iterator
    ///
    /// Returns `None` for an empty iterator; callers treat that as a
    /// degenerate viewport fit (a no-op).
    pub fn enclosing<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = positions.into_iter();
        let mut bounds = Self::of(iter.next()?);
        for position in iter {
            bounds.extend(position);
        }
        Some(bounds)
    }
}
