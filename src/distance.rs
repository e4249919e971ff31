use num_traits::Float;

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)) * ((*x) - (*y)))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_known_triangle() {
        let a = vec![0.0_f64, 0.0];
        let b = vec![3.0, 4.0];
        assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_is_symmetric() {
        let a = vec![1.5_f32, -2.0, 0.25];
        let b = vec![-0.5, 1.0, 4.0];
        assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
    }

    #[test]
    fn euclidean_zero_for_identical_points() {
        let a = vec![2.0_f64, 7.0];
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }
}
