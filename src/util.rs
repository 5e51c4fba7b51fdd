use std::cmp::Ordering;

/// Total order for partially ordered values, incomparable values are equal.
#[derive(PartialEq, Clone, Copy)]
pub struct OrdWrapper<T: PartialOrd>(pub T);

impl<T: PartialOrd> Eq for OrdWrapper<T> {}

impl<T: PartialOrd> PartialOrd for OrdWrapper<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for OrdWrapper<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Largest value of the iterator, `None` if it is empty.
pub fn max_value<T: PartialOrd + Copy>(iter: impl Iterator<Item = T>) -> Option<T> {
    iter.map(OrdWrapper).max().map(|OrdWrapper(v)| v)
}

/// Arithmetic mean, `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn max_and_mean() {
        assert_eq!(max_value([1.0, 7.0, 3.0].into_iter()), Some(7.0));
        assert_eq!(max_value(std::iter::empty::<f64>()), None);
        assert_eq!(
            max_value([f64::NEG_INFINITY, 2.0].into_iter()),
            Some(2.0)
        );
        assert_eq!(mean(&[0.0, 10.0]), 5.0);
        assert!(mean(&[]).is_nan());
    }
}
