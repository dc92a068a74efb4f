use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::geometry::{Geometry, GeometryType};
use super::linestring::LineString;
use super::points::Dim;
use super::serialization::{parse_wkb, parse_wkt, wkb_geometry_type};

/// A collection of curve elements sharing one coordinate dimension
///
/// This is the multicurve of the OGC model with line strings as its concrete
/// curve elements. The WKT keywords `MULTILINESTRING` and `MULTICURVE` and
/// the WKB type codes 5 and 11 all narrow to this type; anything else is
/// rejected by the typed constructors.
///
/// Examples
/// ```rust
/// use curvelib::MultiCurve;
///
/// let mc = MultiCurve::from_text("MULTILINESTRING ((1 1, 2 1), (2 2, 2 3))").unwrap();
/// assert_eq!(mc.num_curves(), 2);
/// ```
#[derive(Debug)]
pub struct MultiCurve {
    curves: Vec<LineString>,
    dim: Dim,
}

impl MultiCurve {
    /// Instantiate a multicurve from its elements.
    ///
    /// All elements must share one coordinate dimensionality; an empty
    /// vector yields an empty 2D multicurve.
    pub fn new(curves: Vec<LineString>) -> GeomResult<Self> {
        let Some(first) = curves.first() else {
            return Ok(Self::empty(Dim::Xy));
        };
        let dim = first.dim();
        for curve in &curves[1..] {
            if curve.dim() != dim {
                return Err(GeometryError::ParameterError(String::from(
                    "All curve elements must share the same coordinate dimension",
                )));
            }
        }
        Ok(Self { curves, dim })
    }

    /// An empty multicurve of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            curves: Vec::new(),
            dim,
        }
    }

    /// Parse a multicurve from WKT.
    ///
    /// The input is parsed as a generic geometry first; any top-level type
    /// other than a multicurve fails with
    /// [`GeometryError::UnexpectedGeometryType`], even when the WKT itself
    /// is well formed.
    pub fn from_text(wkt: &str) -> GeomResult<Self> {
        Self::narrow(parse_wkt(wkt)?)
    }

    /// Parse a multicurve from WKB.
    ///
    /// The type is checked against the buffer header before the body is
    /// parsed, so a wrong-type buffer is rejected with
    /// [`GeometryError::UnexpectedGeometryType`] even when its kind is one
    /// the crate cannot structurally parse.
    pub fn from_binary(wkb: &[u8]) -> GeomResult<Self> {
        let (gtype, _) = wkb_geometry_type(wkb)?;
        if !gtype.is_multicurve() {
            log::debug!("Rejecting WKB typed {gtype} at the MultiCurve entry point");
            return Err(GeometryError::UnexpectedGeometryType {
                expected: GeometryType::MultiCurve.name(),
                actual: gtype.name(),
            });
        }
        Self::narrow(parse_wkb(wkb)?)
    }

    /// Narrow a generic geometry to a multicurve, failing closed on mismatch
    fn narrow(geometry: Geometry) -> GeomResult<Self> {
        match geometry {
            Geometry::MultiCurve(mc) => Ok(mc),
            other => {
                let actual = other.geometry_type();
                log::debug!("Rejecting {actual} at the MultiCurve entry point");
                Err(GeometryError::UnexpectedGeometryType {
                    expected: GeometryType::MultiCurve.name(),
                    actual: actual.name(),
                })
            }
        }
    }

    /// The curve elements of the collection
    pub fn curves(&self) -> &[LineString] {
        &self.curves
    }

    /// Number of curve elements
    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    /// Coordinate dimensionality of the collection
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the collection has no elements
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl GeometricObject for MultiCurve {
    /// WKT representation of the multicurve, in its concrete
    /// MULTILINESTRING form
    fn wkt(&self) -> String {
        if self.curves.is_empty() {
            return format!("MULTILINESTRING{} EMPTY", self.dim.wkt_modifier());
        }
        let mut out = format!("MULTILINESTRING{} (", self.dim.wkt_modifier());
        for curve in &self.curves {
            out.push('(');
            for pt in curve.points() {
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

display_for_geom!(MultiCurve);
