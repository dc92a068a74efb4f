use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::linestring::LineString;
use super::multicurve::MultiCurve;
use super::points::{Dim, MultiPoint, Point};
use super::polygons::{MultiPolygon, Polygon};
use super::serialization::{parse_wkb, parse_wkt};
use std::fmt;

/// Discriminator over the OGC geometry kinds.
///
/// Covers the base Simple Features kinds plus the extended type codes that
/// appear in WKB type headers. The extended kinds beyond `MultiCurve` are
/// recognized by the WKB type sniffer but are not structurally materialized
/// by this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GeometryType {
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    MultiCurve,
    MultiSurface,
    Curve,
    Surface,
    PolyhedralSurface,
    Tin,
    Triangle,
}

impl GeometryType {
    /// Construct a geometry type from the base portion of a WKB type code
    /// (dimension offsets and flag bits already stripped)
    pub fn try_from_wkb_id(wkb_id: u32) -> GeomResult<Self> {
        match wkb_id {
            0 => Ok(Self::Geometry),
            1 => Ok(Self::Point),
            2 => Ok(Self::LineString),
            3 => Ok(Self::Polygon),
            4 => Ok(Self::MultiPoint),
            5 => Ok(Self::MultiLineString),
            6 => Ok(Self::MultiPolygon),
            7 => Ok(Self::GeometryCollection),
            8 => Ok(Self::CircularString),
            9 => Ok(Self::CompoundCurve),
            10 => Ok(Self::CurvePolygon),
            11 => Ok(Self::MultiCurve),
            12 => Ok(Self::MultiSurface),
            13 => Ok(Self::Curve),
            14 => Ok(Self::Surface),
            15 => Ok(Self::PolyhedralSurface),
            16 => Ok(Self::Tin),
            17 => Ok(Self::Triangle),
            _ => Err(GeometryError::ParsingError(format!(
                "Unknown WKB geometry type identifier: {wkb_id}"
            ))),
        }
    }

    /// The base WKB type code for this kind
    pub fn wkb_id(&self) -> u32 {
        match self {
            Self::Geometry => 0,
            Self::Point => 1,
            Self::LineString => 2,
            Self::Polygon => 3,
            Self::MultiPoint => 4,
            Self::MultiLineString => 5,
            Self::MultiPolygon => 6,
            Self::GeometryCollection => 7,
            Self::CircularString => 8,
            Self::CompoundCurve => 9,
            Self::CurvePolygon => 10,
            Self::MultiCurve => 11,
            Self::MultiSurface => 12,
            Self::Curve => 13,
            Self::Surface => 14,
            Self::PolyhedralSurface => 15,
            Self::Tin => 16,
            Self::Triangle => 17,
        }
    }

    /// Canonical name of the geometry kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Geometry => "Geometry",
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::CircularString => "CircularString",
            Self::CompoundCurve => "CompoundCurve",
            Self::CurvePolygon => "CurvePolygon",
            Self::MultiCurve => "MultiCurve",
            Self::MultiSurface => "MultiSurface",
            Self::Curve => "Curve",
            Self::Surface => "Surface",
            Self::PolyhedralSurface => "PolyhedralSurface",
            Self::Tin => "Tin",
            Self::Triangle => "Triangle",
        }
    }

    /// Whether a geometry of this kind is a multicurve (MultiCurve itself or
    /// its concrete subtype MultiLineString)
    pub fn is_multicurve(&self) -> bool {
        matches!(self, Self::MultiLineString | Self::MultiCurve)
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A heterogeneous collection of geometries sharing one coordinate dimension
#[derive(Debug)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dim,
}

impl GeometryCollection {
    /// Instantiate a collection; all members must share one coordinate
    /// dimensionality. An empty vector yields an empty 2D collection.
    pub fn new(geometries: Vec<Geometry>) -> GeomResult<Self> {
        let Some(first) = geometries.first() else {
            return Ok(Self::empty(Dim::Xy));
        };
        let dim = first.dim();
        for geom in &geometries[1..] {
            if geom.dim() != dim {
                return Err(GeometryError::ParameterError(String::from(
                    "All collection members must share the same coordinate dimension",
                )));
            }
        }
        Ok(Self { geometries, dim })
    }

    /// An empty collection of the given dimensionality
    pub fn empty(dim: Dim) -> Self {
        Self {
            geometries: Vec::new(),
            dim,
        }
    }

    /// The members of the collection
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Coordinate dimensionality of the collection
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Whether the collection has no members
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl GeometricObject for GeometryCollection {
    /// WKT representation of the collection
    fn wkt(&self) -> String {
        if self.geometries.is_empty() {
            return format!("GEOMETRYCOLLECTION{} EMPTY", self.dim.wkt_modifier());
        }
        let mut out = format!("GEOMETRYCOLLECTION{} (", self.dim.wkt_modifier());
        for geom in &self.geometries {
            out.push_str(&geom.wkt());
            out.push_str(", ");
        }
        out = out.strip_suffix(", ").unwrap().to_string();
        out.push(')');
        out
    }
}

display_for_geom!(GeometryCollection);

/// Wrapper for geometry objects obtained from parsing serialized input
#[derive(Debug)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiCurve(MultiCurve),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Parse any supported geometry from its WKT representation
    pub fn from_text(wkt: &str) -> GeomResult<Self> {
        parse_wkt(wkt)
    }

    /// Parse any supported geometry from its WKB representation
    pub fn from_binary(wkb: &[u8]) -> GeomResult<Self> {
        parse_wkb(wkb)
    }

    /// The kind discriminator of the wrapped geometry
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiCurve(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Coordinate dimensionality of the wrapped geometry
    pub fn dim(&self) -> Dim {
        match self {
            Self::Point(pt) => pt.dim(),
            Self::LineString(ls) => ls.dim(),
            Self::Polygon(poly) => poly.dim(),
            Self::MultiPoint(mp) => mp.dim(),
            Self::MultiCurve(mc) => mc.dim(),
            Self::MultiPolygon(mp) => mp.dim(),
            Self::GeometryCollection(gc) => gc.dim(),
        }
    }

    /// Whether the wrapped geometry has no coordinates
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(pt) => pt.is_empty(),
            Self::LineString(ls) => ls.is_empty(),
            Self::Polygon(poly) => poly.is_empty(),
            Self::MultiPoint(mp) => mp.is_empty(),
            Self::MultiCurve(mc) => mc.is_empty(),
            Self::MultiPolygon(mp) => mp.is_empty(),
            Self::GeometryCollection(gc) => gc.is_empty(),
        }
    }
}

impl GeometricObject for Geometry {
    fn wkt(&self) -> String {
        match self {
            Self::Point(pt) => pt.wkt(),
            Self::LineString(ls) => ls.wkt(),
            Self::Polygon(poly) => poly.wkt(),
            Self::MultiPoint(mp) => mp.wkt(),
            Self::MultiCurve(mc) => mc.wkt(),
            Self::MultiPolygon(mp) => mp.wkt(),
            Self::GeometryCollection(gc) => gc.wkt(),
        }
    }
}

display_for_geom!(Geometry);
