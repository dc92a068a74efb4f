pub mod cli_commands;
pub mod core;
pub mod engine;
mod geometry;
mod linestring;
mod multicurve;
mod points;
mod polygons;
pub mod serialization;

pub use self::core::*;
pub use self::geometry::*;
pub use self::linestring::*;
pub use self::multicurve::*;
pub use self::points::*;
pub use self::polygons::*;
