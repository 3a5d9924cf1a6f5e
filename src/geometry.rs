use egui::{Pos2, Rect};

/// How far `point` is from the closest point of the segment `a`-`b`.
/// A zero-length segment behaves as the single point `a`.
pub(crate) fn distance_to_line_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Smallest rectangle holding all `points`, grown by `padding`.
/// `Rect::NOTHING` for no points.
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    let Some(first) = points.first() else {
        return Rect::NOTHING;
    };
    points
        .iter()
        .fold(Rect::from_min_max(*first, *first), |rect, p| rect.union(Rect::from_min_max(*p, *p)))
        .expand(padding)
}
