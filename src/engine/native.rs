use super::{EngineError, EngineResult, GeometryEngine, Operation};
use crate::geometry::Geometry;
use crate::linestring::LineString;

/// Pure-Rust geometry engine.
///
/// Supports curve geometries (line strings and multicurves). Lengths are
/// Euclidean on the XY plane; closure checks are dimension-aware and
/// include Z. Anything else fails with a capability error.
#[derive(Debug, Default)]
pub struct NativeEngine;

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Sum of consecutive segment lengths along one line string
fn linestring_length(ls: &LineString) -> f64 {
    ls.edges().map(|(a, b)| a.l2_distance(b)).sum()
}

impl GeometryEngine for NativeEngine {
    fn name(&self) -> &str {
        "native"
    }

    fn supports(&self, _op: Operation, geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::LineString(_) | Geometry::MultiCurve(_))
    }

    fn length(&self, geometry: &Geometry) -> EngineResult<f64> {
        match geometry {
            Geometry::LineString(ls) => Ok(linestring_length(ls)),
            Geometry::MultiCurve(mc) => {
                Ok(mc.curves().iter().map(linestring_length).sum())
            }
            _ => Err(EngineError::unsupported(self, Operation::Length, geometry)),
        }
    }

    fn is_closed(&self, geometry: &Geometry) -> EngineResult<bool> {
        match geometry {
            Geometry::LineString(ls) => Ok(ls.is_closed()),
            Geometry::MultiCurve(mc) => {
                // An empty multicurve is not closed
                if mc.is_empty() {
                    return Ok(false);
                }
                Ok(mc.curves().iter().all(LineString::is_closed))
            }
            _ => Err(EngineError::unsupported(self, Operation::IsClosed, geometry)),
        }
    }
}
