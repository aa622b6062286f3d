use crate::Point;

pub const MIN_HIT_RADIUS: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn expand(self, pad: f64) -> Self {
        Self {
            min_x: self.min_x - pad,
            min_y: self.min_y - pad,
            max_x: self.max_x + pad,
            max_y: self.max_y + pad,
        }
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}

pub fn path_bounds(points: &[Point]) -> Option<Bounds> {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for point in points {
        min_x = min_x.min(point.x as f64);
        min_y = min_y.min(point.y as f64);
        max_x = max_x.max(point.x as f64);
        max_y = max_y.max(point.y as f64);
    }
    if min_x == f64::MAX {
        None
    } else {
        Some(Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }
}

pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = ((px - x1) * dx + (py - y1) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);
    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Returns true when `point` lies within half the stroke width of the path,
/// never closer than [`MIN_HIT_RADIUS`] so thin strokes stay clickable.
pub fn path_hit(points: &[Point], width: f32, point: Point) -> bool {
    if points.is_empty() {
        return false;
    }
    let threshold = (width as f64 / 2.0).max(MIN_HIT_RADIUS);
    let px = point.x as f64;
    let py = point.y as f64;
    if points.len() == 1 {
        let dx = points[0].x as f64 - px;
        let dy = points[0].y as f64 - py;
        return dx * dx + dy * dy <= threshold * threshold;
    }
    points.windows(2).any(|window| {
        let start = window[0];
        let end = window[1];
        distance_to_segment(
            px,
            py,
            start.x as f64,
            start.y as f64,
            end.x as f64,
            end.y as f64,
        ) <= threshold
    })
}

pub fn translate_points(points: &mut [Point], dx: f32, dy: f32) {
    for point in points {
        *point = point.offset(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_points() {
        assert!(normalize_point(Point::new(f32::NAN, 1.0)).is_none());
        assert!(normalize_point(Point::new(1.0, f32::INFINITY)).is_none());
        assert_eq!(
            normalize_point(Point::new(3.0, 4.0)),
            Some(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn hit_uses_minimum_radius_for_thin_paths() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        assert!(path_hit(&points, 1.0, Point::new(50.0, 5.5)));
        assert!(!path_hit(&points, 1.0, Point::new(50.0, 7.0)));
    }

    #[test]
    fn hit_uses_half_width_for_thick_paths() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 100.0)];
        assert!(path_hit(&points, 30.0, Point::new(14.0, 50.0)));
        assert!(!path_hit(&points, 30.0, Point::new(16.0, 50.0)));
    }

    #[test]
    fn single_point_path_hits_as_dot() {
        let points = [Point::new(10.0, 10.0)];
        assert!(path_hit(&points, 5.0, Point::new(14.0, 10.0)));
        assert!(!path_hit(&points, 5.0, Point::new(20.0, 10.0)));
        assert!(!path_hit(&[], 5.0, Point::new(10.0, 10.0)));
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            Point::new(5.0, 40.0),
            Point::new(-2.0, 10.0),
            Point::new(20.0, 12.0),
        ];
        let bounds = path_bounds(&points).expect("bounds");
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 20.0);
        assert_eq!(bounds.min_y, 10.0);
        assert_eq!(bounds.max_y, 40.0);
        assert_eq!(bounds.width(), 22.0);
        assert!(path_bounds(&[]).is_none());
    }
}
