use super::core::{self, GeomResult, GeometricObject, GeometryError, display_for_geom};

/// Coordinate dimensionality of a geometry.
///
/// Every geometry carries one of these; all elements of a multi-geometry
/// share the dimensionality of their parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Dim {
    Xy,
    Xyz,
    Xym,
    Xyzm,
}

impl Dim {
    /// Build a dimension from Z/M presence flags
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Self::Xy,
            (true, false) => Self::Xyz,
            (false, true) => Self::Xym,
            (true, true) => Self::Xyzm,
        }
    }

    /// Whether points of this dimension carry a Z (elevation) coordinate
    pub fn has_z(&self) -> bool {
        matches!(self, Self::Xyz | Self::Xyzm)
    }

    /// Whether points of this dimension carry an M (measure) coordinate
    pub fn has_m(&self) -> bool {
        matches!(self, Self::Xym | Self::Xyzm)
    }

    /// Number of coordinate values per point
    pub fn coord_count(&self) -> usize {
        2 + usize::from(self.has_z()) + usize::from(self.has_m())
    }

    /// WKT dimension modifier following the geometry keyword, including the
    /// leading space (empty for plain XY)
    pub fn wkt_modifier(&self) -> &'static str {
        match self {
            Self::Xy => "",
            Self::Xyz => " Z",
            Self::Xym => " M",
            Self::Xyzm => " ZM",
        }
    }
}

/// A single point, in 2D or with optional Z (elevation) and M (measure) coordinates
///
/// Examples
/// ```rust
/// use curvelib::Point;
/// let my_point = Point::new(0.2, -7.9);
/// let (x, y) = my_point.coords();
/// ```
#[derive(Clone, Debug)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

/// A simple collection of points
#[derive(Debug)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dim,
}

impl Point {
    /// Instantiate a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Instantiate a point with a Z coordinate
    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Instantiate a point with an M coordinate
    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// Instantiate a point with both Z and M coordinates
    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Coordinate dimensionality of this point
    pub fn dim(&self) -> Dim {
        Dim::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Return the L2 (Euclidean) distance to another point on the XY plane
    pub fn l2_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    /// Return true if the point is approximately equal to other on the XY plane.
    pub fn is_close(&self, other: &Point) -> bool {
        core::approx(self.x, other.x) && core::approx(self.y, other.y)
    }

    /// Return whether this point occupies the same position as another.
    ///
    /// Compares X, Y, and Z when present. The M coordinate is a measure, not
    /// a position, and never participates in coincidence.
    pub fn is_coincident(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Get X and Y coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether this is the empty point.
    ///
    /// WKB has no dedicated empty-point encoding; NaN coordinates are the
    /// conventional representation, and the WKT parser follows it for
    /// `POINT EMPTY`.
    pub fn is_empty(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    /// The Z coordinate, if this point carries one
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// The M coordinate, if this point carries one
    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// Space-separated coordinate values as they appear inside WKT
    pub(crate) fn wkt_coords(&self) -> String {
        let mut out = format!("{} {}", self.x, self.y);
        if let Some(z) = self.z {
            out.push_str(&format!(" {z}"));
        }
        if let Some(m) = self.m {
            out.push_str(&format!(" {m}"));
        }
        out
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        if self.is_empty() {
            return format!("POINT{} EMPTY", self.dim().wkt_modifier());
        }
        format!("POINT{} ({})", self.dim().wkt_modifier(), self.wkt_coords())
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection.
    ///
    /// All points must share one coordinate dimensionality; an empty vector
    /// yields an empty 2D multipoint.
    ///
    /// Example
    /// ```rust
    /// use curvelib::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]).unwrap();
    /// ```
    pub fn new(pts: Vec<Point>) -> GeomResult<Self> {
        let dim = uniform_dim(&pts)?.unwrap_or(Dim::Xy);
        Ok(Self { points: pts, dim })
    }

    /// An empty multipoint of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            points: Vec::new(),
            dim,
        }
    }

    /// The points of the collection
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinate dimensionality of the collection
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the collection has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        if self.points.is_empty() {
            return format!("MULTIPOINT{} EMPTY", self.dim.wkt_modifier());
        }
        let mut out = format!("MULTIPOINT{} (", self.dim.wkt_modifier());
        for pt in &self.points {
            out.push_str(&pt.wkt_coords());
            out.push_str(", ");
        }
        out = out.strip_suffix(", ").unwrap().to_string();
        out.push(')');
        out
    }
}

display_for_geom!(MultiPoint);

/// Shared dimensionality of a point slice, or None when the slice is empty
pub(crate) fn uniform_dim(pts: &[Point]) -> GeomResult<Option<Dim>> {
    let Some(first) = pts.first() else {
        return Ok(None);
    };
    let dim = first.dim();
    for pt in &pts[1..] {
        if pt.dim() != dim {
            return Err(GeometryError::ParameterError(String::from(
                "All points must share the same coordinate dimension",
            )));
        }
    }
    Ok(Some(dim))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_close_pts() {
        let p1 = Point::new(20.0, 20.0);
        let p2 = Point::new(20.0 + 1e-7, 20.0);
        let p3 = Point::new(20.0 + 1e-12, 20.0 - 1e-12);

        assert!(!p1.is_close(&p2));
        assert!(p1.is_close(&p3));
    }

    #[test]
    fn test_coincidence_2d() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(1.0, 1.0);
        let p3 = Point::new(1.0, 2.0);

        assert!(p1.is_coincident(&p2));
        assert!(!p1.is_coincident(&p3));
    }

    #[test]
    fn test_coincidence_z_aware() {
        let p1 = Point::new_z(1.0, 1.0, 0.0);
        let p2 = Point::new_z(1.0, 1.0, 0.0);
        let p3 = Point::new_z(1.0, 1.0, 1.0);

        assert!(p1.is_coincident(&p2));
        assert!(!p1.is_coincident(&p3));
    }

    #[test]
    fn test_coincidence_ignores_m() {
        let p1 = Point::new_m(1.0, 1.0, 5.0);
        let p2 = Point::new_m(1.0, 1.0, 9.0);

        assert!(p1.is_coincident(&p2));
    }

    #[test]
    fn test_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);

        assert!(core::approx(p1.l2_distance(&p2), 5.0));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Point::new(0.0, 0.0).dim(), Dim::Xy);
        assert_eq!(Point::new_z(0.0, 0.0, 0.0).dim(), Dim::Xyz);
        assert_eq!(Point::new_m(0.0, 0.0, 0.0).dim(), Dim::Xym);
        assert_eq!(Point::new_zm(0.0, 0.0, 0.0, 0.0).dim(), Dim::Xyzm);

        assert_eq!(Dim::Xyzm.coord_count(), 4);
        assert_eq!(Dim::Xy.coord_count(), 2);
    }

    #[test]
    fn test_point_wkt() {
        assert_eq!(Point::new(1.0, 2.0).wkt(), "POINT (1 2)");
        assert_eq!(Point::new_z(1.0, 2.0, 3.0).wkt(), "POINT Z (1 2 3)");
        assert_eq!(Point::new_zm(1.0, 2.0, 3.0, 4.0).wkt(), "POINT ZM (1 2 3 4)");
    }

    #[test]
    fn test_multipoint_mixed_dims() {
        let pts = vec![Point::new(0.0, 0.0), Point::new_z(0.0, 1.0, 2.0)];
        if let Ok(_) = MultiPoint::new(pts) {
            panic!("Instantiated a multipoint with mixed coordinate dimensions");
        }
    }

    #[test]
    fn test_multipoint_wkt() {
        let mp = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.5)]).unwrap();
        assert_eq!(mp.wkt(), "MULTIPOINT (0 0, 1 1.5)");
    }
}
