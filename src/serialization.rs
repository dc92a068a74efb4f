use super::core::GeomResult;

pub mod wkb;
pub mod wkt;

pub use wkb::{parse_wkb, wkb_geometry_type};
pub use wkt::parse_wkt;

/// Result of a partial parse: the parsed value plus the unconsumed tail
pub(crate) type ParserResult<'a, T> = GeomResult<(T, &'a str)>;
