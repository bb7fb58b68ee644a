//! Derived statistics shared by the domain accessors.
//!
//! Small pure functions: percentage with a zero-total policy, band
//! midpoints, and a weighted percentile over a band histogram.

/// Percentage of `value` in `total`.
///
/// A zero total yields `0.0` by policy; division by zero is never an
/// error condition in this layer.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

/// Representative value of a `[low, high]` band.
pub fn band_midpoint(low: f64, high: f64) -> f64 {
    (low + high) / 2.0
}

/// Percentile of the multiset implied by `(value, count)` pairs.
///
/// Equivalent to expanding each value `count` times, sorting, and taking
/// the percentile with linear interpolation between order statistics
/// (the numpy default), but computed over the histogram directly.
/// Fractional counts are truncated toward zero. Returns `None` when the
/// histogram is empty.
pub fn weighted_percentile(pairs: &[(f64, f64)], p: f64) -> Option<f64> {
    let mut bands: Vec<(f64, u64)> = pairs
        .iter()
        .map(|&(value, count)| (value, count.max(0.0) as u64))
        .filter(|&(_, count)| count > 0)
        .collect();
    bands.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n: u64 = bands.iter().map(|&(_, c)| c).sum();
    if n == 0 {
        return None;
    }

    // Rank into the virtual sorted multiset of size n.
    let pos = p / 100.0 * (n - 1) as f64;
    let lower_idx = pos.floor() as u64;
    let frac = pos - pos.floor();

    let lower = value_at(&bands, lower_idx);
    if frac == 0.0 {
        return Some(lower);
    }
    let upper = value_at(&bands, lower_idx + 1);
    Some(lower + frac * (upper - lower))
}

/// Order statistic `idx` (0-based) of the histogram's multiset.
fn value_at(bands: &[(f64, u64)], idx: u64) -> f64 {
    let mut cumulative = 0u64;
    for &(value, count) in bands {
        cumulative += count;
        if idx < cumulative {
            return value;
        }
    }
    // idx beyond the multiset only happens for p == 100 on the last
    // element boundary; clamp to the top value.
    bands.last().map(|&(v, _)| v).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_total_is_zero() {
        assert_eq!(percentage(42.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_zero_value() {
        assert_eq!(percentage(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_percentage_of_self_is_hundred() {
        assert_eq!(percentage(50.0, 50.0), 100.0);
        assert_eq!(percentage(0.5, 0.5), 100.0);
    }

    #[test]
    fn test_band_midpoint() {
        assert_eq!(band_midpoint(650.0, 799.0), 724.5);
    }

    #[test]
    fn test_weighted_percentile_single_band() {
        let pairs = [(724.5, 10.0)];
        for p in [25.0, 50.0, 75.0, 90.0] {
            assert_eq!(weighted_percentile(&pairs, p), Some(724.5));
        }
    }

    #[test]
    fn test_weighted_percentile_empty() {
        assert_eq!(weighted_percentile(&[], 50.0), None);
        assert_eq!(weighted_percentile(&[(724.5, 0.0)], 50.0), None);
    }

    #[test]
    fn test_weighted_percentile_interpolates() {
        // Multiset {100, 200}: median interpolates halfway.
        let pairs = [(100.0, 1.0), (200.0, 1.0)];
        assert_eq!(weighted_percentile(&pairs, 50.0), Some(150.0));
        assert_eq!(weighted_percentile(&pairs, 25.0), Some(125.0));
        assert_eq!(weighted_percentile(&pairs, 100.0), Some(200.0));
    }

    #[test]
    fn test_weighted_percentile_matches_expansion() {
        // Multiset {10 x4, 20 x1}: pos(50) = 2.0 -> 10,
        // pos(90) = 3.6 -> 10 + 0.6 * (20 - 10) = 16.
        let pairs = [(10.0, 4.0), (20.0, 1.0)];
        assert_eq!(weighted_percentile(&pairs, 50.0), Some(10.0));
        assert_eq!(weighted_percentile(&pairs, 90.0), Some(16.0));
    }

    #[test]
    fn test_weighted_percentile_truncates_fractional_counts() {
        // 0.9 truncates to zero, so only the 200-band remains.
        let pairs = [(100.0, 0.9), (200.0, 2.0)];
        assert_eq!(weighted_percentile(&pairs, 50.0), Some(200.0));
    }

    #[test]
    fn test_weighted_percentile_unsorted_input() {
        let pairs = [(200.0, 1.0), (100.0, 1.0)];
        assert_eq!(weighted_percentile(&pairs, 50.0), Some(150.0));
    }
}
