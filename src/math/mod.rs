pub mod error;
pub mod geometry;
pub mod types;
pub mod units;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            CloseRejection, PointSequence, Polygon, PolygonProperties, ScanlineSampling,
            average_slope, can_close, check_closure, compute_slopes, distance,
            polygon_area_pixels, polygon_area_pixels_with,
        },
        types::*,
        units::{ScaleFactor, area_to_physical_units},
        utils::constants::{CLOSE_THRESHOLD, DEFAULT_SCALE_FACTOR},
    };
}
