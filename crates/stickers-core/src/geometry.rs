//! Frame helpers for center-anchored items.

use kurbo::{Point, Rect, Size, Vec2};

/// Scale `size` to fit within `bounds` while preserving aspect ratio.
///
/// Sizes are scaled up as well as down. Degenerate sizes (zero, negative
/// or non-finite on either axis) are returned unchanged.
pub fn aspect_fit(size: Size, bounds: Size) -> Size {
    if !is_usable(size) || !is_usable(bounds) {
        return size;
    }

    let scale = (bounds.width / size.width).min(bounds.height / size.height);
    Size::new(size.width * scale, size.height * scale)
}

/// Top-left corner of a frame with the given center and size.
pub fn origin_of(center: Point, size: Size) -> Point {
    center - size.to_vec2() / 2.0
}

/// Center of a frame with the given top-left corner and size.
pub fn center_of(origin: Point, size: Size) -> Point {
    origin + size.to_vec2() / 2.0
}

/// Frame rectangle for a center-anchored item.
pub fn frame_of(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Vector from `origin` to `point`, expressed as a size-like offset.
pub fn offset_from(origin: Point, point: Point) -> Vec2 {
    point - origin
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_into_box() {
        let fitted = aspect_fit(Size::new(1000.0, 500.0), Size::new(200.0, 200.0));
        assert!((fitted.width - 200.0).abs() < 0.01);
        assert!((fitted.height - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_tall_into_box() {
        let fitted = aspect_fit(Size::new(150.0, 300.0), Size::new(200.0, 200.0));
        assert!((fitted.width - 100.0).abs() < 0.01);
        assert!((fitted.height - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_scales_small_sizes_up() {
        let fitted = aspect_fit(Size::new(40.0, 30.0), Size::new(200.0, 200.0));
        assert!((fitted.width - 200.0).abs() < 0.01);
        assert!((fitted.height - 150.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_degenerate_unchanged() {
        let size = Size::new(0.0, 50.0);
        assert_eq!(aspect_fit(size, Size::new(200.0, 200.0)), size);

        let size = Size::new(f64::NAN, 50.0);
        let fitted = aspect_fit(size, Size::new(200.0, 200.0));
        assert!(fitted.width.is_nan());
    }

    #[test]
    fn test_origin_center_inverse() {
        let size = Size::new(80.0, 40.0);
        let origin = origin_of(Point::new(100.0, 100.0), size);
        assert_eq!(origin, Point::new(60.0, 80.0));
        assert_eq!(center_of(origin, size), Point::new(100.0, 100.0));

        let frame = frame_of(Point::new(100.0, 100.0), size);
        assert!((frame.x0 - 60.0).abs() < f64::EPSILON);
        assert!((frame.y1 - 120.0).abs() < f64::EPSILON);
    }
}
