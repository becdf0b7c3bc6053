use gridnav_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Total over the whole `i32` plane.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Squared Euclidean distance between two points.
///
/// Orders points exactly like the true Euclidean distance, without floats.
/// Total over the whole `i32` plane.
#[inline]
pub fn euclidean_sq(a: Point, b: Point) -> u128 {
    let dx = u128::from(a.x.abs_diff(b.x));
    let dy = u128::from(a.y.abs_diff(b.y));
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean_sq(a, b), 25);
        assert_eq!(euclidean_sq(b, b), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let span = u64::from(u32::MAX);
        assert_eq!(manhattan(a, b), 2 * span);
        assert_eq!(manhattan(b, a), 2 * span);
        assert_eq!(euclidean_sq(a, b), 2 * u128::from(span) * u128::from(span));
    }
}
