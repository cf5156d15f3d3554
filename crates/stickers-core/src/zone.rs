//! Disposal zone geometry and hit testing.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Axis-aligned region that deletes an item dropped on it.
///
/// Proximity is measured with a fixed square hit-box about the zone's
/// center, independent of the zone's own size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisposalZone {
    /// Zone bounds in container coordinates.
    pub rect: Rect,
}

impl DisposalZone {
    /// Create a zone from its bounds.
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Create a zone from a top-left origin and size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(Rect::from_origin_size(origin, size))
    }

    /// Center of the zone; the shrink target.
    pub fn center(&self) -> Point {
        Point::new(
            self.rect.x0 + self.rect.width() / 2.0,
            self.rect.y0 + self.rect.height() / 2.0,
        )
    }

    /// Check if a point lies strictly inside the hit-box of the given
    /// half-width centered on the zone.
    pub fn hit_test(&self, point: Point, half_extent: f64) -> bool {
        let center = self.center();
        (point.x - center.x).abs() < half_extent && (point.y - center.y).abs() < half_extent
    }
}

/// Hit test against an optional zone; an unset zone is never hit.
pub fn hit_test(zone: Option<&DisposalZone>, point: Point, half_extent: f64) -> bool {
    zone.is_some_and(|zone| zone.hit_test(point, half_extent))
}
