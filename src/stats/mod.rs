//! Statistical analysis for measurement series
//!
//! The central operation is the empirical coverage interval: given a sample
//! sequence and a coverage mass, find the data points bounding that mass.
//! Nothing here is parametric; bounds are always observed values.


/// Compute the empirical coverage interval over a sample sequence
///
/// NaNs are dropped. An empty (or all-NaN) input yields `(NaN, NaN)`. The
/// remaining samples are sorted ascending and walked once: the lower bound
/// is the last element visited while fewer than `(1 - conf) * n` elements
/// precede it; the upper bound is the first element at which the visited
/// count reaches `conf * n`, after which the walk stops. Thresholds compare
/// integer counts against `conf * n` rather than accumulating a
/// floating-point `1/n` mass, so large inputs cannot drift across a
/// threshold. No interpolation: both bounds are actual data points.
///
/// `conf` must lie in `(0, 1]`; `conf = 1.0` returns the sample extremes.
pub fn confidence_interval(conf: f64, values: &[f64]) -> (f64, f64) {
    debug_assert!(conf > 0.0 && conf <= 1.0, "coverage mass out of range");

    let mut data: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if data.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = data.len() as f64;
    let mut lower = data[0];
    let mut upper = data[data.len() - 1];

    for (seen, &value) in data.iter().enumerate() {
        if (seen as f64) < (1.0 - conf) * n {
            lower = value;
        }
        if (seen as f64 + 1.0) >= conf * n {
            upper = value;
            break;
        }
    }

    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nan() {
        let (lower, upper) = confidence_interval(0.95, &[]);
        assert!(lower.is_nan());
        assert!(upper.is_nan());
    }

    #[test]
    fn test_all_nan_input_yields_nan() {
        let (lower, upper) = confidence_interval(0.95, &[f64::NAN, f64::NAN]);
        assert!(lower.is_nan());
        assert!(upper.is_nan());
    }

    #[test]
    fn test_single_element() {
        let (lower, upper) = confidence_interval(0.95, &[42.0]);
        assert_eq!(lower, 42.0);
        assert_eq!(upper, 42.0);
    }

    #[test]
    fn test_full_mass_returns_extremes() {
        let values = [3.0, 1.0, 2.0, 5.0, 4.0];
        let (lower, upper) = confidence_interval(1.0, &values);
        assert_eq!(lower, 1.0);
        assert_eq!(upper, 5.0);
    }

    #[test]
    fn test_known_bounds_for_hundred_samples() {
        // 1..=100: 95% mass trims up to five elements from each tail,
        // leaving the fifth-smallest and fifth-largest as bounds.
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let (lower, upper) = confidence_interval(0.95, &values);
        assert_eq!(lower, 5.0);
        assert_eq!(upper, 95.0);
    }

    #[test]
    fn test_nan_values_are_ignored() {
        let values = [f64::NAN, 1.0, f64::NAN, 2.0, 3.0];
        let (lower, upper) = confidence_interval(1.0, &values);
        assert_eq!(lower, 1.0);
        assert_eq!(upper, 3.0);
    }

    #[test]
    fn test_unsorted_input() {
        let values = [9.0, 2.0, 7.0, 1.0, 8.0, 3.0, 6.0, 4.0, 5.0, 10.0];
        let (lower, upper) = confidence_interval(0.5, &values);
        assert!(lower <= upper);
        assert!(values.contains(&lower));
        assert!(values.contains(&upper));
    }
}
