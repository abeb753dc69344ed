// src/math/geometry/mod.rs

pub mod polygon;

// Polygon-Exporte
pub use self::polygon::{
    CloseRejection, PointSequence, Polygon, PolygonProperties, ScanlineSampling, average_slope,
    can_close, check_closure, compute_slopes, distance, polygon_area_pixels,
    polygon_area_pixels_with,
};
