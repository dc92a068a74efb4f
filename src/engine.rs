use super::geometry::{Geometry, GeometryType};
use std::fmt;
use thiserror::Error;

pub mod native;

pub use native::NativeEngine;

/// Predicates and measures a geometry engine may provide
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Length,
    IsClosed,
}

impl Operation {
    /// Canonical name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::IsClosed => "isClosed",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors raised by a geometry engine backend
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine {engine} does not support {operation} on {geometry}")]
    UnsupportedOperation {
        engine: String,
        operation: Operation,
        geometry: GeometryType,
    },

    #[error("geometry engine failure: {0}")]
    Backend(String),
}

impl EngineError {
    /// Build the capability error an engine raises when asked for an
    /// operation it cannot perform on a geometry kind
    pub fn unsupported(engine: &dyn GeometryEngine, op: Operation, geometry: &Geometry) -> Self {
        Self::UnsupportedOperation {
            engine: engine.name().to_string(),
            operation: op,
            geometry: geometry.geometry_type(),
        }
    }
}

/// Convenience alias for results of engine computations
pub type EngineResult<T> = Result<T, EngineError>;

/// A swappable backend providing geometric predicates and measures.
///
/// Engines advertise their capabilities through [`supports`]; a caller may
/// query up front, or invoke directly and handle
/// [`EngineError::UnsupportedOperation`]. Either way an engine must fail
/// with a distinguishable error rather than return a made-up value for an
/// operation it cannot perform.
///
/// [`supports`]: GeometryEngine::supports
pub trait GeometryEngine {
    /// Identifier of the backend, used in error messages
    fn name(&self) -> &str;

    /// Whether the engine can perform the operation on this geometry
    fn supports(&self, op: Operation, geometry: &Geometry) -> bool;

    /// Total length of the geometry
    fn length(&self, geometry: &Geometry) -> EngineResult<f64>;

    /// Whether every curve element of the geometry is closed
    fn is_closed(&self, geometry: &Geometry) -> EngineResult<bool>;
}
