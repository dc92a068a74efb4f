use crate::core::{GeomResult, GeometryError};
use crate::geometry::{Geometry, GeometryCollection, GeometryType};
use crate::linestring::LineString;
use crate::multicurve::MultiCurve;
use crate::points::{Dim, MultiPoint, Point};
use crate::polygons::{MultiPolygon, Polygon};

// EWKB dimension and SRID flag bits, on top of the ISO +1000/+2000 offsets
const Z_FLAG_BIT: u32 = 0x8000_0000;
const M_FLAG_BIT: u32 = 0x4000_0000;
const SRID_FLAG_BIT: u32 = 0x2000_0000;

/// Cursor over a WKB buffer.
///
/// The byte order is per-geometry: every nested geometry restates it in its
/// own header, so `read_header` resets the cursor's endianness.
struct WkbReader<'a> {
    buf: &'a [u8],
    offset: usize,
    big_endian: bool,
}

impl<'a> WkbReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            big_endian: true,
        }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Cap a declared element count by what the remaining bytes could hold,
    /// so a lying count cannot trigger a huge pre-allocation. Reading still
    /// fails on the missing bytes.
    fn bounded_capacity(&self, count: u32, min_element_size: usize) -> usize {
        (count as usize).min(self.remaining() / min_element_size.max(1))
    }

    fn take(&mut self, count: usize) -> GeomResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(GeometryError::ParsingError(String::from(
                "Unexpected end of WKB buffer",
            )));
        }
        let bytes = &self.buf[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> GeomResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> GeomResult<u32> {
        let bytes: [u8; 4] = self.take(4)?.try_into().unwrap();
        if self.big_endian {
            Ok(u32::from_be_bytes(bytes))
        } else {
            Ok(u32::from_le_bytes(bytes))
        }
    }

    fn read_f64(&mut self) -> GeomResult<f64> {
        let bytes: [u8; 8] = self.take(8)?.try_into().unwrap();
        if self.big_endian {
            Ok(f64::from_be_bytes(bytes))
        } else {
            Ok(f64::from_le_bytes(bytes))
        }
    }

    /// Read a geometry header: byte order marker, type code, and (for EWKB)
    /// an SRID, which is read and discarded
    fn read_header(&mut self) -> GeomResult<(GeometryType, Dim)> {
        let order = self.read_u8()?;
        self.big_endian = match order {
            0x00 => true,
            0x01 => false,
            other => {
                return Err(GeometryError::ParsingError(format!(
                    "Invalid WKB byte order marker: {other:#04x}"
                )));
            }
        };
        let code = self.read_u32()?;
        let (gtype, dim, has_srid) = decode_type_code(code)?;
        if has_srid {
            self.read_u32()?;
        }
        Ok((gtype, dim))
    }
}

/// Split a WKB type code into its kind, dimension, and SRID flag.
///
/// Understands both the ISO encoding (base + 1000 for Z, + 2000 for M,
/// + 3000 for ZM) and the EWKB flag bits.
fn decode_type_code(code: u32) -> GeomResult<(GeometryType, Dim, bool)> {
    let has_srid = code & SRID_FLAG_BIT != 0;
    let mut has_z = code & Z_FLAG_BIT != 0;
    let mut has_m = code & M_FLAG_BIT != 0;

    let stripped = code & !(Z_FLAG_BIT | M_FLAG_BIT | SRID_FLAG_BIT);
    let base = stripped % 1000;
    match stripped / 1000 {
        0 => (),
        1 => has_z = true,
        2 => has_m = true,
        3 => {
            has_z = true;
            has_m = true;
        }
        other => {
            return Err(GeometryError::ParsingError(format!(
                "Invalid WKB dimension offset: {}",
                other * 1000
            )));
        }
    }

    let gtype = GeometryType::try_from_wkb_id(base)?;
    Ok((gtype, Dim::from_flags(has_z, has_m), has_srid))
}

/// Classify a WKB buffer by its first header without parsing the body.
///
/// This recognizes every kind with a known type code, including the extended
/// kinds the crate cannot structurally parse, so callers can reject
/// wrong-type buffers with a type error rather than a parse error.
pub fn wkb_geometry_type(buf: &[u8]) -> GeomResult<(GeometryType, Dim)> {
    WkbReader::new(buf).read_header()
}

/// Parse a WKB byte buffer and return the parsed geometry object
///
/// Both byte orders are accepted, as are the ISO and EWKB dimension
/// encodings; an EWKB SRID is read and discarded. Trailing bytes after the
/// geometry are an error.
pub fn parse_wkb(buf: &[u8]) -> GeomResult<Geometry> {
    let mut reader = WkbReader::new(buf);
    let geom = read_geometry(&mut reader)?;
    if reader.remaining() != 0 {
        Err(GeometryError::ParsingError(String::from(
            "Trailing bytes after WKB geometry",
        )))
    } else {
        Ok(geom)
    }
}

/// Read one geometry, header included, from the cursor position
fn read_geometry(reader: &mut WkbReader) -> GeomResult<Geometry> {
    let (gtype, dim) = reader.read_header()?;
    match gtype {
        GeometryType::Point => Ok(Geometry::Point(read_point(reader, dim)?)),
        GeometryType::LineString => Ok(Geometry::LineString(read_linestring(reader, dim)?)),
        GeometryType::Polygon => Ok(Geometry::Polygon(read_polygon_body(reader, dim)?)),
        GeometryType::MultiPoint => {
            let count = reader.read_u32()?;
            let mut pts = Vec::with_capacity(reader.bounded_capacity(count, 5));
            for _ in 0..count {
                expect_element_header(reader, GeometryType::Point, dim)?;
                pts.push(read_point(reader, dim)?);
            }
            if pts.is_empty() {
                Ok(Geometry::MultiPoint(MultiPoint::empty(dim)))
            } else {
                Ok(Geometry::MultiPoint(MultiPoint::new(pts)?))
            }
        }
        GeometryType::MultiLineString | GeometryType::MultiCurve => {
            let count = reader.read_u32()?;
            let mut curves = Vec::with_capacity(reader.bounded_capacity(count, 5));
            for _ in 0..count {
                expect_element_header(reader, GeometryType::LineString, dim)?;
                curves.push(read_linestring(reader, dim)?);
            }
            if curves.is_empty() {
                Ok(Geometry::MultiCurve(MultiCurve::empty(dim)))
            } else {
                Ok(Geometry::MultiCurve(MultiCurve::new(curves)?))
            }
        }
        GeometryType::MultiPolygon => {
            let count = reader.read_u32()?;
            let mut polys = Vec::with_capacity(reader.bounded_capacity(count, 5));
            for _ in 0..count {
                expect_element_header(reader, GeometryType::Polygon, dim)?;
                polys.push(read_polygon_body(reader, dim)?);
            }
            if polys.is_empty() {
                Ok(Geometry::MultiPolygon(MultiPolygon::empty(dim)))
            } else {
                Ok(Geometry::MultiPolygon(MultiPolygon::new(polys)?))
            }
        }
        GeometryType::GeometryCollection => {
            let count = reader.read_u32()?;
            let mut members = Vec::with_capacity(reader.bounded_capacity(count, 5));
            for _ in 0..count {
                members.push(read_geometry(reader)?);
            }
            if members.is_empty() {
                Ok(Geometry::GeometryCollection(GeometryCollection::empty(
                    dim,
                )))
            } else {
                Ok(Geometry::GeometryCollection(GeometryCollection::new(
                    members,
                )?))
            }
        }
        other => {
            log::debug!("No structural parser for WKB geometry type {other}");
            Err(GeometryError::ParsingError(format!(
                "Unsupported WKB geometry type: {other}"
            )))
        }
    }
}

/// Read the header of a multi-geometry element and check it against the
/// expected kind and the parent's dimension
fn expect_element_header(
    reader: &mut WkbReader,
    expected: GeometryType,
    parent_dim: Dim,
) -> GeomResult<()> {
    let (gtype, dim) = reader.read_header()?;
    if gtype != expected {
        return Err(GeometryError::ParsingError(format!(
            "Mismatched element in WKB multi-geometry: expected {expected}, got {gtype}"
        )));
    }
    if dim != parent_dim {
        return Err(GeometryError::ParsingError(String::from(
            "WKB element dimension differs from its parent",
        )));
    }
    Ok(())
}

/// Read one point's worth of coordinates (header already consumed)
fn read_point(reader: &mut WkbReader, dim: Dim) -> GeomResult<Point> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    Ok(match dim {
        Dim::Xy => Point::new(x, y),
        Dim::Xyz => Point::new_z(x, y, reader.read_f64()?),
        Dim::Xym => Point::new_m(x, y, reader.read_f64()?),
        Dim::Xyzm => {
            let z = reader.read_f64()?;
            let m = reader.read_f64()?;
            Point::new_zm(x, y, z, m)
        }
    })
}

/// Read a line string body: point count followed by packed coordinates
fn read_linestring(reader: &mut WkbReader, dim: Dim) -> GeomResult<LineString> {
    let count = reader.read_u32()?;
    if count == 0 {
        return Ok(LineString::empty(dim));
    }
    let mut pts = Vec::with_capacity(reader.bounded_capacity(count, 16));
    for _ in 0..count {
        pts.push(read_point(reader, dim)?);
    }
    LineString::new(pts)
}

/// Read a polygon body: ring count, then each ring as a packed point list
/// (rings carry no nested headers)
fn read_polygon_body(reader: &mut WkbReader, dim: Dim) -> GeomResult<Polygon> {
    let ring_count = reader.read_u32()?;
    if ring_count == 0 {
        return Ok(Polygon::empty(dim));
    }
    let mut rings = Vec::with_capacity(reader.bounded_capacity(ring_count, 4));
    for _ in 0..ring_count {
        let point_count = reader.read_u32()?;
        let mut pts = Vec::with_capacity(reader.bounded_capacity(point_count, 16));
        for _ in 0..point_count {
            pts.push(read_point(reader, dim)?);
        }
        rings.push(LineString::new(pts)?);
    }
    Polygon::new(rings)
}
