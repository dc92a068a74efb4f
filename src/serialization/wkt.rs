use super::ParserResult;
use crate::core::{GeomResult, GeometryError};
use crate::geometry::{Geometry, GeometryCollection, GeometryType};
use crate::linestring::LineString;
use crate::multicurve::MultiCurve;
use crate::points::{Dim, MultiPoint, Point};
use crate::polygons::{MultiPolygon, Polygon};
use regex::Regex;
use std::sync::OnceLock;

const NUMBER: &str = r"^\s*(-?\d+\.?\d*(?:[eE][-+]?\d+)?)";
const GEOM_TYPE: &str = r"^\s*([A-Z]+)";

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();

/// Get coordinate number regex once to avoid recompilation (thread-safe)
fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER).unwrap())
}

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).unwrap())
}

/// Parse a WKT string and return the parsed geometry object
///
/// The function takes a geometry in WKT format and returns a [Geometry]
/// wrapping the actual value. Returns an error if parsing failed. Keywords
/// must be uppercase; `Z`, `M`, and `ZM` dimension modifiers and `EMPTY`
/// coordinate blocks are accepted for every geometry kind.
///
/// Examples
/// ```rust
/// use curvelib::Geometry;
/// use curvelib::serialization::parse_wkt;
///
/// // Instantiate a point from string
/// if let Ok(Geometry::Point(pt)) = parse_wkt("POINT (0 0)") {
///     println!("My point is: {pt:?}");
/// }
///
/// // Instantiate a multicurve
/// match parse_wkt("MULTILINESTRING ((1 1, 2 1), (2 2, 2 3))") {
///     Ok(Geometry::MultiCurve(mc)) => println!("I got a multicurve! {mc:?}"),
///     Ok(_) => println!("This is weird..."),
///     _ => panic!("Failed"),
/// }
/// ```
pub fn parse_wkt(input: &str) -> GeomResult<Geometry> {
    let (geom, trailing) = parse_geometry(input)?;
    if !trailing.trim().is_empty() {
        Err(GeometryError::ParsingError(String::from(
            "Trailing characters after geometry!",
        )))
    } else {
        Ok(geom)
    }
}

/// Parse a single geometry from the start of a WKT string
pub(crate) fn parse_geometry<'a>(input: &'a str) -> ParserResult<'a, Geometry> {
    let (gtype, rest) = identify_type(input)?;
    let (dim, rest) = parse_dim_modifier(rest);

    match gtype {
        GeometryType::Point => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::Point(empty_point(dim)), tail));
            }
            let (pt, tail) = parse_point(rest, dim)?;
            Ok((Geometry::Point(pt), tail))
        }
        GeometryType::LineString => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::LineString(LineString::empty(dim)), tail));
            }
            let (pts, tail) = parse_coordinate_list(rest, dim)?;
            Ok((Geometry::LineString(LineString::new(pts)?), tail))
        }
        GeometryType::Polygon => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::Polygon(Polygon::empty(dim)), tail));
            }
            let (rings, tail) = parse_line_list(rest, dim)?;
            Ok((Geometry::Polygon(Polygon::new(rings)?), tail))
        }
        GeometryType::MultiPoint => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::MultiPoint(MultiPoint::empty(dim)), tail));
            }
            let (pts, tail) = parse_coordinate_list(rest, dim)?;
            Ok((Geometry::MultiPoint(MultiPoint::new(pts)?), tail))
        }
        GeometryType::MultiLineString | GeometryType::MultiCurve => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::MultiCurve(MultiCurve::empty(dim)), tail));
            }
            let (curves, tail) = parse_line_list(rest, dim)?;
            Ok((Geometry::MultiCurve(MultiCurve::new(curves)?), tail))
        }
        GeometryType::MultiPolygon => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((Geometry::MultiPolygon(MultiPolygon::empty(dim)), tail));
            }
            let (polys, tail) = parse_polygon_list(rest, dim)?;
            Ok((Geometry::MultiPolygon(MultiPolygon::new(polys)?), tail))
        }
        GeometryType::GeometryCollection => {
            if let Some(tail) = strip_empty(rest) {
                return Ok((
                    Geometry::GeometryCollection(GeometryCollection::empty(dim)),
                    tail,
                ));
            }
            let (members, tail) = parse_geometry_list(rest)?;
            let gc = GeometryCollection::new(members)?;
            if dim != Dim::Xy && gc.dim() != dim {
                return Err(GeometryError::ParsingError(String::from(
                    "Collection members do not match the declared dimension modifier",
                )));
            }
            Ok((Geometry::GeometryCollection(gc), tail))
        }
        other => Err(GeometryError::ParsingError(format!(
            "Unsupported WKT geometry type: {other}"
        ))),
    }
}

/// Identifies the type of geometry at the start of a WKT string
fn identify_type<'a>(raw_str: &'a str) -> ParserResult<'a, GeometryType> {
    let re = geom_type_re();
    if let Some(cap) = re.captures(raw_str) {
        let keyword = cap.get(1).unwrap().as_str();
        let end = cap.get(0).unwrap().end();
        let gtype = match keyword {
            "POINT" => GeometryType::Point,
            "LINESTRING" => GeometryType::LineString,
            "POLYGON" => GeometryType::Polygon,
            "MULTIPOINT" => GeometryType::MultiPoint,
            "MULTILINESTRING" => GeometryType::MultiLineString,
            "MULTICURVE" => GeometryType::MultiCurve,
            "MULTIPOLYGON" => GeometryType::MultiPolygon,
            "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
            _ => {
                return Err(GeometryError::ParsingError(format!(
                    "Unsupported Geometry: {keyword}"
                )));
            }
        };
        Ok((gtype, &raw_str[end..]))
    } else {
        Err(GeometryError::ParsingError(String::from(
            "Could not parse shape type",
        )))
    }
}

/// Consume an optional Z / M / ZM dimension modifier after the keyword
fn parse_dim_modifier(raw: &str) -> (Dim, &str) {
    let trimmed = raw.trim_start();
    for (token, dim) in [("ZM", Dim::Xyzm), ("Z", Dim::Xyz), ("M", Dim::Xym)] {
        if let Some(rest) = trimmed.strip_prefix(token) {
            // The modifier must stand alone before '(' or EMPTY
            if rest.starts_with([' ', '\t', '(']) {
                return (dim, rest);
            }
        }
    }
    (Dim::Xy, raw)
}

/// Consume an EMPTY coordinate block, if present
fn strip_empty(raw: &str) -> Option<&str> {
    raw.trim_start().strip_prefix("EMPTY")
}

/// Consume an expected punctuation token after optional whitespace
fn strip_token<'a>(raw: &'a str, token: &str) -> GeomResult<&'a str> {
    raw.trim_start().strip_prefix(token).ok_or_else(|| {
        GeometryError::ParsingError(format!("Expected '{token}' while parsing WKT"))
    })
}

/// The empty point, represented with NaN coordinates as in WKB
fn empty_point(dim: Dim) -> Point {
    let nan = f64::NAN;
    match dim {
        Dim::Xy => Point::new(nan, nan),
        Dim::Xyz => Point::new_z(nan, nan, nan),
        Dim::Xym => Point::new_m(nan, nan, nan),
        Dim::Xyzm => Point::new_zm(nan, nan, nan, nan),
    }
}

/// Parse one coordinate number from the start of a string
fn parse_number<'a>(raw: &'a str) -> ParserResult<'a, f64> {
    let re = number_re();
    if let Some(cap) = re.captures(raw) {
        let matched = cap.get(1).unwrap().as_str();
        let value = matched.parse::<f64>().map_err(|_| {
            GeometryError::ParsingError(format!("Invalid coordinate value: {matched}"))
        })?;
        Ok((value, &raw[cap.get(0).unwrap().end()..]))
    } else {
        Err(GeometryError::ParsingError(String::from(
            "Could not parse coordinates",
        )))
    }
}

/// Parse one point's worth of coordinate values for the given dimension
fn parse_coord<'a>(raw: &'a str, dim: Dim) -> ParserResult<'a, Point> {
    let mut values = [0.0f64; 4];
    let mut rest = raw;
    for slot in values.iter_mut().take(dim.coord_count()) {
        let (value, tail) = parse_number(rest)?;
        *slot = value;
        rest = tail;
    }
    let [x, y, a, b] = values;
    let pt = match dim {
        Dim::Xy => Point::new(x, y),
        Dim::Xyz => Point::new_z(x, y, a),
        Dim::Xym => Point::new_m(x, y, a),
        Dim::Xyzm => Point::new_zm(x, y, a, b),
    };
    Ok((pt, rest))
}

/// Parse a point's coordinates (after removing the type prefix from the string)
fn parse_point<'a>(raw: &'a str, dim: Dim) -> ParserResult<'a, Point> {
    let rest = strip_token(raw, "(")?;
    let (pt, rest) = parse_coord(rest, dim)?;
    let rest = strip_token(rest, ")")?;
    Ok((pt, rest))
}

/// Parse a parenthesized list of coordinates from the start of a string
fn parse_coordinate_list<'a>(raw_str: &'a str, dim: Dim) -> ParserResult<'a, Vec<Point>> {
    let mut rest = strip_token(raw_str, "(")?;
    let mut pts = Vec::new();
    loop {
        let (pt, tail) = parse_coord(rest, dim)?;
        pts.push(pt);
        rest = tail;
        match strip_token(rest, ",") {
            Ok(tail) => rest = tail,
            Err(_) => break,
        }
    }
    let rest = strip_token(rest, ")")?;
    Ok((pts, rest))
}

/// Parse a parenthesized list of coordinate lists (polygon rings or
/// multicurve elements)
fn parse_line_list<'a>(raw_str: &'a str, dim: Dim) -> ParserResult<'a, Vec<LineString>> {
    let mut rest = strip_token(raw_str, "(")?;
    let mut lines = Vec::new();
    loop {
        let (pts, tail) = parse_coordinate_list(rest, dim)?;
        lines.push(LineString::new(pts)?);
        rest = tail;
        match strip_token(rest, ",") {
            Ok(tail) => rest = tail,
            Err(_) => break,
        }
    }
    let rest = strip_token(rest, ")")?;
    Ok((lines, rest))
}

/// Parse a parenthesized list of polygons (each a list of rings)
fn parse_polygon_list<'a>(raw_str: &'a str, dim: Dim) -> ParserResult<'a, Vec<Polygon>> {
    let mut rest = strip_token(raw_str, "(")?;
    let mut polys = Vec::new();
    loop {
        let (rings, tail) = parse_line_list(rest, dim)?;
        polys.push(Polygon::new(rings)?);
        rest = tail;
        match strip_token(rest, ",") {
            Ok(tail) => rest = tail,
            Err(_) => break,
        }
    }
    let rest = strip_token(rest, ")")?;
    Ok((polys, rest))
}

/// Parse a parenthesized list of whole geometries (collection members)
fn parse_geometry_list<'a>(raw_str: &'a str) -> ParserResult<'a, Vec<Geometry>> {
    let mut rest = strip_token(raw_str, "(")?;
    let mut members = Vec::new();
    loop {
        let (geom, tail) = parse_geometry(rest)?;
        members.push(geom);
        rest = tail;
        match strip_token(rest, ",") {
            Ok(tail) => rest = tail,
            Err(_) => break,
        }
    }
    let rest = strip_token(rest, ")")?;
    Ok((members, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeometricObject;
    use rand::{Rng, rng};

    // Get a vector of random points with coordinates between 0 and 1
    fn get_random_points(total: usize) -> Vec<Point> {
        let mut random = rng();
        let mut points = Vec::with_capacity(total);

        for _ in 0..total {
            points.push(Point::new(random.random(), random.random()));
        }
        points
    }

    #[test]
    fn test_identify_type_valid() {
        if let Err(_) = identify_type("POINT (0 0)") {
            panic!("Failed to parse valid geom type");
        }

        if let Ok(gt) = identify_type("POINT (0 0)") {
            match gt {
                (GeometryType::Point, _) => (),
                _ => {
                    panic!("Unexpected type: {gt:?}")
                }
            }
        }

        if let Ok(gt) = identify_type("MULTILINESTRING ((1 1, 2 1))") {
            match gt {
                (GeometryType::MultiLineString, _) => (),
                _ => {
                    panic!("Unexpected type: {gt:?}")
                }
            }
        } else {
            panic!("Failed to parse valid geom type");
        }
    }

    #[test]
    fn test_identify_type_invalid() {
        let res = identify_type("PoinT(0 1)");
        match res {
            Ok(_) => panic!("Expected parse error (capitalization)"),
            _ => (),
        }

        let res2 = identify_type("PO INT(0 1)");
        match res2 {
            Ok(_) => panic!("Expected parse error (spacing)"),
            _ => (),
        }

        let res3 = identify_type("! POLYGON ((0 0, 0 1, 1 1, 0 0))");
        match res3 {
            Ok(_) => panic!("Expected parse error (invalid prefix)"),
            _ => (),
        }

        let res4 = identify_type("NOTASHAPE ((0 0, 0 1, 1 1, 0 0))");
        match res4 {
            Ok(_) => panic!("Expected parse error (invalid type)"),
            _ => (),
        }
    }

    #[test]
    fn test_dim_modifiers() {
        let (dim, rest) = parse_dim_modifier(" Z (1 2 3)");
        assert_eq!(dim, Dim::Xyz);
        assert_eq!(rest.trim_start(), "(1 2 3)");

        let (dim, _) = parse_dim_modifier(" ZM (1 2 3 4)");
        assert_eq!(dim, Dim::Xyzm);

        let (dim, _) = parse_dim_modifier(" M EMPTY");
        assert_eq!(dim, Dim::Xym);

        // No modifier present
        let (dim, rest) = parse_dim_modifier(" (1 2)");
        assert_eq!(dim, Dim::Xy);
        assert_eq!(rest, " (1 2)");
    }

    #[test]
    fn test_parse_point_valid() {
        let total_examples = 250;
        let mut random = rng();
        for _ in 0..total_examples {
            let x = (random.random::<f64>() - 0.5) * 2.0;
            let y = (random.random::<f64>() - 0.5) * 2.0;
            let pt1 = Point::new(x, y);
            let wkt_str = pt1.wkt();

            match parse_wkt(&wkt_str).unwrap() {
                Geometry::Point(pt) => {
                    assert!(pt.is_close(&pt1))
                }
                _ => panic!("Expected a point!"),
            }
        }
    }

    #[test]
    fn test_parse_point_dimensions() {
        match parse_wkt("POINT Z (1 2 3)").unwrap() {
            Geometry::Point(pt) => {
                assert_eq!(pt.coords(), (1.0, 2.0));
                assert_eq!(pt.z(), Some(3.0));
                assert_eq!(pt.m(), None);
            }
            other => panic!("Expected a point, got {other:?}"),
        }

        match parse_wkt("POINT ZM (1 2 3 4)").unwrap() {
            Geometry::Point(pt) => {
                assert_eq!(pt.z(), Some(3.0));
                assert_eq!(pt.m(), Some(4.0));
            }
            other => panic!("Expected a point, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_point_invalid() {
        match parse_wkt("POINT(0 1, 2 3)") {
            Err(_) => (),
            _ => panic!("Parsed invalid point (2 coordinate pairs)"),
        }

        match parse_wkt("POINT (0)") {
            Err(_) => (),
            _ => panic!("Parsed invalid point (1 coordinate)"),
        }

        match parse_wkt("POINT(-0.9 1.75 9.0)") {
            Err(_) => (),
            _ => panic!("Parsed invalid point (3 coordinates without modifier)"),
        }

        match parse_wkt("POINT(0 1))") {
            Err(_) => (),
            _ => panic!("Parsed invalid point (invalid parentheses)"),
        }

        match parse_wkt("-POINT(0 1)") {
            Err(_) => (),
            _ => panic!("Parsed invalid point (invalid prefix)"),
        }
    }

    #[test]
    fn test_parse_empties() {
        assert!(matches!(
            parse_wkt("POINT EMPTY").unwrap(),
            Geometry::Point(_)
        ));
        assert!(matches!(
            parse_wkt("LINESTRING EMPTY").unwrap(),
            Geometry::LineString(_)
        ));
        assert!(matches!(
            parse_wkt("GEOMETRYCOLLECTION EMPTY").unwrap(),
            Geometry::GeometryCollection(_)
        ));
        assert!(matches!(
            parse_wkt("MULTIPOLYGON EMPTY").unwrap(),
            Geometry::MultiPolygon(_)
        ));

        let geom = parse_wkt("MULTILINESTRING Z EMPTY").unwrap();
        assert!(geom.is_empty());
        assert_eq!(geom.dim(), Dim::Xyz);
    }

    #[test]
    fn test_parse_coord_list_valid() {
        let raw_str = "(0 1, 0.9 -2.5, 9 0.001)";
        let (pts, rest) = parse_coordinate_list(raw_str, Dim::Xy).unwrap();
        assert_eq!(pts.len(), 3);
        assert!(rest.is_empty());

        let raw_str = "(0 1, 0.9 -2.5, 9 0.001))END";
        let (pts, rest) = parse_coordinate_list(raw_str, Dim::Xy).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(rest, ")END");
    }

    #[test]
    fn test_parse_coord_list_random() {
        let pts = get_random_points(300);
        let mut formatted = String::from("(");
        for p in &pts {
            let (x, y) = p.coords();
            formatted.push_str(&format!("{} {},", x, y));
        }
        let mut formatted = formatted.trim_end_matches(',').to_string();
        formatted.push(')');

        let (pts2, _) = parse_coordinate_list(&formatted, Dim::Xy).unwrap();
        assert_eq!(pts.len(), pts2.len());

        for (a, b) in pts.iter().zip(pts2) {
            assert!(a.is_close(&b))
        }
    }

    #[test]
    fn test_parse_coord_list_invalid() {
        if let Ok(_) = parse_coordinate_list("(0, 0.0 1.98)", Dim::Xy) {
            panic!("Parsed invalid coordinate list (1-dimension point)")
        }

        if let Ok(_) = parse_coordinate_list("(0 -1.0, 0.0 1.98, Q P)", Dim::Xy) {
            panic!("Parsed invalid coordinate list (invalid suffix)")
        }

        if let Ok(_) = parse_coordinate_list("(0 -1.0, 0.0 1.98", Dim::Xy) {
            panic!("Parsed invalid coordinate list (unclosed parentheses)")
        }

        if let Ok(_) = parse_coordinate_list("0 -1.0, 0.0 1.98)", Dim::Xy) {
            panic!("Parsed invalid coordinate list (unopened parentheses)")
        }
    }

    #[test]
    fn test_parse_multilinestring_valid() {
        match parse_wkt("MULTILINESTRING ((1 1, 2 1), (2 2, 2 3))") {
            Ok(Geometry::MultiCurve(mc)) => {
                assert_eq!(mc.num_curves(), 2);
                assert_eq!(mc.curves()[1].total_vertices(), 2);
            }
            Ok(_) => panic!("Expected a multicurve!"),
            Err(err) => panic!("Unable to parse multilinestring: {err}"),
        }
    }

    #[test]
    fn test_parse_multilinestring_z() {
        let wkt = "MULTILINESTRING Z ((1 1 0, 1 2 0, 2 2 0, 1 1 0), (1 1 1, 2 2 1, 3 3 1, 1 1 1))";
        match parse_wkt(wkt) {
            Ok(Geometry::MultiCurve(mc)) => {
                assert_eq!(mc.num_curves(), 2);
                assert_eq!(mc.dim(), Dim::Xyz);
                assert_eq!(mc.curves()[1].points()[0].z(), Some(1.0));
            }
            Ok(_) => panic!("Expected a multicurve!"),
            Err(err) => panic!("Unable to parse multilinestring: {err}"),
        }
    }

    #[test]
    fn test_parse_multilinestring_invalid() {
        if let Ok(_) = parse_wkt("MULTILINESTRING (1 1, 2 1)") {
            panic!("Parsed invalid multilinestring (missing inner parentheses)!");
        }

        if let Ok(_) = parse_wkt("MULTILINESTRING ((1 1, 2 1)") {
            panic!("Parsed invalid multilinestring (unclosed parentheses)!");
        }

        if let Ok(_) = parse_wkt("MULTILINESTRING ((1 1))") {
            panic!("Parsed invalid multilinestring (single-point element)!");
        }

        if let Ok(_) = parse_wkt("MULTILINESTRING ((1 1 0, 2 1 0))") {
            panic!("Parsed invalid multilinestring (3 coordinates without modifier)!");
        }
    }

    #[test]
    fn test_parse_polygon_valid() {
        match parse_wkt("POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))") {
            Ok(Geometry::Polygon(poly)) => {
                let outer = &poly.rings()[0];
                assert_eq!(outer.total_vertices(), 5);
                assert!(outer.points()[0].is_close(&Point::new(0.0, 0.0)));
                assert!(outer.points()[2].is_close(&Point::new(1.0, 1.0)));
            }
            Ok(_) => panic!("Expected a polygon!"),
            Err(err) => panic!("Unable to parse polygon: {err}"),
        }
    }

    #[test]
    fn test_parse_polygon_invalid() {
        if let Ok(_) = parse_wkt("POLYGON(0 0, 1 0, 1 1, 0 0)") {
            panic!("Parsed invalid polygon (wrong parenthesis count)!");
        }

        if let Ok(_) = parse_wkt("POLYGON((0 0, 1 0, 1 1, 0 1))") {
            panic!("Parsed invalid polygon (not closed)!");
        }

        if let Ok(_) = parse_wkt("POLYGON((0 0, 1 0, 0 0))") {
            panic!("Parsed invalid polygon (too few points)!");
        }

        if let Ok(_) = parse_wkt("POLYGON ((0 0, 1 0, 1 1, 0 0)") {
            panic!("Parsed invalid polygon (mismatched parentheses)!");
        }
    }

    #[test]
    fn test_parse_multipoint_valid() {
        match parse_wkt("MULTIPOINT(0 0, 1 0, 0.5 0.5, 0 1)") {
            Err(err) => panic!("Could not parse multipoint: {err}"),
            Ok(Geometry::MultiPoint(mp)) => {
                assert_eq!(mp.points().len(), 4);
                assert!(mp.points()[0].is_close(&Point::new(0.0, 0.0)));
                assert!(mp.points()[2].is_close(&Point::new(0.5, 0.5)));
            }
            Ok(_) => panic!("Expected multipoint!"),
        }
    }

    #[test]
    fn test_parse_multipoint_random() {
        let total_pts = 500;
        let mp1 = MultiPoint::new(get_random_points(total_pts)).unwrap();
        match parse_wkt(&mp1.wkt()) {
            Err(err) => panic!("Could not parse multipoint: {err}"),
            Ok(Geometry::MultiPoint(mp2)) => {
                assert_eq!(mp2.points().len(), total_pts);

                for (p, q) in mp1.points().iter().zip(mp2.points()) {
                    assert!(p.is_close(q));
                }
            }
            Ok(_) => panic!("Expected multipoint!"),
        }
    }

    #[test]
    fn test_parse_multipolygon_valid() {
        match parse_wkt("MULTIPOLYGON (((0 0, 0 1, 1 1, 0 0)), ((2 2, 2 3, 3 3, 2 2)))") {
            Ok(Geometry::MultiPolygon(mp)) => {
                assert_eq!(mp.polygons().len(), 2);
            }
            Ok(_) => panic!("Expected multipolygon!"),
            Err(err) => panic!("Could not parse multipolygon: {err}"),
        }
    }

    #[test]
    fn test_parse_collection() {
        match parse_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))") {
            Ok(Geometry::GeometryCollection(gc)) => {
                assert_eq!(gc.geometries().len(), 2);
            }
            Ok(_) => panic!("Expected a collection!"),
            Err(err) => panic!("Could not parse collection: {err}"),
        }
    }

    #[test]
    fn test_trailing_garbage() {
        if let Ok(_) = parse_wkt("POINT (0 1) AND MORE") {
            panic!("Parsed WKT with trailing characters!");
        }
    }
}
