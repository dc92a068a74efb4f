use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::linestring::LineString;
use super::points::Dim;

/// Represents a polygon as an exterior ring plus optional interior rings
///
/// Every ring is a closed line string with at least 4 vertices; all rings
/// share the polygon's coordinate dimension.
#[derive(Debug)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dim,
}

impl Polygon {
    /// Instantiate a polygon from its rings, exterior first
    pub fn new(rings: Vec<LineString>) -> GeomResult<Self> {
        let Some(first) = rings.first() else {
            return Ok(Self::empty(Dim::Xy));
        };
        let dim = first.dim();
        for ring in &rings {
            if ring.total_vertices() < 4 {
                return Err(GeometryError::ParameterError(format!(
                    "Too few points for a polygon ring: {}!",
                    ring.total_vertices()
                )));
            }
            if !ring.is_closed() {
                return Err(GeometryError::ParameterError(String::from(
                    "To make a polygon ring, the first and last points must match!",
                )));
            }
            if ring.dim() != dim {
                return Err(GeometryError::ParameterError(String::from(
                    "All polygon rings must share the same coordinate dimension",
                )));
            }
        }
        Ok(Self { rings, dim })
    }

    /// An empty polygon of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            rings: Vec::new(),
            dim,
        }
    }

    /// The rings of the polygon, exterior first
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Coordinate dimensionality of the polygon
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the polygon has no rings
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Ring list without the geometry keyword, as it appears inside WKT
    pub(crate) fn wkt_rings(&self) -> String {
        let mut out = String::from("(");
        for ring in &self.rings {
            out.push('(');
            for pt in ring.points() {
                out.push_str(&pt.wkt_coords());
                out.push_str(", ");
            }
            out = out.strip_suffix(", ").unwrap().to_string();
            out.push_str("), ");
        }
        out = out.strip_suffix(", ").unwrap().to_string();
        out.push(')');
        out
    }
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        if self.rings.is_empty() {
            return format!("POLYGON{} EMPTY", self.dim.wkt_modifier());
        }
        format!("POLYGON{} {}", self.dim.wkt_modifier(), self.wkt_rings())
    }
}

display_for_geom!(Polygon);

/// A collection of polygons sharing one coordinate dimension
#[derive(Debug)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dim,
}

impl MultiPolygon {
    /// Instantiate a multipolygon; an empty vector yields an empty 2D one
    pub fn new(polygons: Vec<Polygon>) -> GeomResult<Self> {
        let Some(first) = polygons.first() else {
            return Ok(Self::empty(Dim::Xy));
        };
        let dim = first.dim();
        for poly in &polygons[1..] {
            if poly.dim() != dim {
                return Err(GeometryError::ParameterError(String::from(
                    "All polygons must share the same coordinate dimension",
                )));
            }
        }
        Ok(Self { polygons, dim })
    }

    /// An empty multipolygon of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            polygons: Vec::new(),
            dim,
        }
    }

    /// The polygons of the collection
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Coordinate dimensionality of the collection
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the collection has no polygons
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl GeometricObject for MultiPolygon {
    /// WKT representation of the multipolygon
    fn wkt(&self) -> String {
        if self.polygons.is_empty() {
            return format!("MULTIPOLYGON{} EMPTY", self.dim.wkt_modifier());
        }
        let mut out = format!("MULTIPOLYGON{} (", self.dim.wkt_modifier());
        for poly in &self.polygons {
            out.push_str(&poly.wkt_rings());
            out.push_str(", ");
        }
        out = out.strip_suffix(", ").unwrap().to_string();
        out.push(')');
        out
    }
}

display_for_geom!(MultiPolygon);
