// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod core; // Punktfolge, Schließbedingung und die Polygon-Struktur selbst
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod scanline; // Flächenberechnung per Scanline (Even-Odd)
pub mod slopes; // Kantenwinkel

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::core::{CloseRejection, PointSequence, Polygon, can_close, check_closure, distance};
pub use self::properties::PolygonProperties;
pub use self::scanline::{
    ScanlineSampling, polygon_area_pixels, polygon_area_pixels_with, scanline_intersections,
};
pub use self::slopes::{average_slope, compute_slopes};
