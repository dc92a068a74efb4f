use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::points::{Dim, Point, uniform_dim};
use std::iter::Zip;
use std::slice::Iter;

/// Represents a sequence of line segments
///
/// A non-empty line string has at least 2 vertices, all of one coordinate
/// dimension. The empty variant exists because WKT and WKB both admit
/// `LINESTRING EMPTY`.
#[derive(Debug)]
pub struct LineString {
    points: Vec<Point>,
    dim: Dim,
}

impl GeometricObject for LineString {
    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        if self.points.is_empty() {
            return format!("LINESTRING{} EMPTY", self.dim.wkt_modifier());
        }
        let mut txt = format!("LINESTRING{} (", self.dim.wkt_modifier());
        for pt in &self.points {
            txt.push_str(&pt.wkt_coords());
            txt.push_str(", ");
        }
        txt = txt.strip_suffix(", ").unwrap().to_string();
        txt.push(')');
        txt
    }
}

display_for_geom!(LineString);

impl LineString {
    /// Instantiate a new LineString from a vector of points
    pub fn new(points: Vec<Point>) -> GeomResult<Self> {
        if points.len() < 2 {
            return Err(GeometryError::ParameterError(String::from(
                "A Line String must have at least 2 vertices",
            )));
        }
        let dim = uniform_dim(&points)?.unwrap_or(Dim::Xy);
        Ok(Self { points, dim })
    }

    /// An empty line string of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            points: Vec::new(),
            dim,
        }
    }

    /// The vertices of the line string
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinate dimensionality of the line string
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the line string has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the segments of the linestring
    pub fn edges<'a>(&'a self) -> Zip<Iter<'a, Point>, Iter<'a, Point>> {
        let tails = self.points.get(1..).unwrap_or_default();
        return self.points.iter().zip(tails);
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }

    /// Whether the first and last vertices coincide.
    ///
    /// The comparison is dimension-aware: Z participates when present, M
    /// never does. An empty line string is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.is_coincident(last),
            _ => false,
        }
    }
}
