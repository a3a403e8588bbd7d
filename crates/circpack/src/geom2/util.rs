use nalgebra::Matrix2;

use super::types::Point2;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point2, b: Point2) -> f64 {
    // determinant of [a b]
    Matrix2::from_columns(&[a, b]).determinant()
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// Returns NaN when `a == b`.
#[inline]
pub fn point_line_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    parallelogram_area(ab, p - a).abs() / ab.norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let b = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let expected = a.x * b.y - a.y * b.x;
        assert!((parallelogram_area(a, b) - expected).abs() < 1e-12);
    }

    #[test]
    fn distance_to_horizontal_line() {
        let d = point_line_distance(vector![3.0, -2.0], vector![0.0, 1.0], vector![5.0, 1.0]);
        assert!((d - 3.0).abs() < 1e-12);
    }
}
