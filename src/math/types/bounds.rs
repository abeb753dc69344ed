// src/math/types/bounds.rs

use crate::math::{error::*, types::Point, utils::constants::MAX_SCANLINE_EXTENT};
use std::fmt;
use std::ops::Range;

/// 2D Bounding Box (Axis-Aligned Bounding Box) in Pixelkoordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point,
    pub max: Point,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point, max: Point) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {} > max {}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt.
    /// `None` für eine leere Punktfolge.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = *points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Vergrößert die Box in alle Richtungen um `amount`.
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }

    /// Ganzzahlige Pixelzeilen `[floor(min.y), ceil(max.y))`, die ein Scanline-Durchlauf besucht.
    /// Bei ganzzahligen Koordinaten entspricht das genau `[min.y, max.y)`.
    /// Auf `±MAX_SCANLINE_EXTENT` begrenzt.
    pub fn scanline_rows(&self) -> Range<i64> {
        if !self.min.y.is_finite() || !self.max.y.is_finite() {
            return 0..0;
        }
        let start = self
            .min
            .y
            .floor()
            .clamp(-MAX_SCANLINE_EXTENT, MAX_SCANLINE_EXTENT);
        let end = self
            .max
            .y
            .ceil()
            .clamp(-MAX_SCANLINE_EXTENT, MAX_SCANLINE_EXTENT);
        (start as i64)..(end as i64)
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D[{} - {}]", self.min, self.max)
    }
}
