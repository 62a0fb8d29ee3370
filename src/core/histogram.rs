// histogram.rs - Equal-width bin edges and weighted bin counts

/// Compute `bins + 1` equal-width edges spanning the values.
///
/// Mirrors numpy's automatic range: `[min, max]`, widened by 0.5 on each
/// side when all values are equal. Empty input and non-finite values are
/// errors.
pub fn bin_edges(values: &[f64], bins: usize) -> Result<Vec<f64>, String> {
    if bins == 0 {
        return Err("Number of bins must be at least 1".to_string());
    }
    if values.is_empty() {
        return Err("Cannot compute bin edges of an empty set of values".to_string());
    }

    let mut first = f64::INFINITY;
    let mut last = f64::NEG_INFINITY;
    for &v in values {
        if v.is_nan() {
            return Err("autodetected range of [nan, nan] is not finite".to_string());
        }
        first = first.min(v);
        last = last.max(v);
    }
    if !first.is_finite() || !last.is_finite() {
        return Err(format!(
            "autodetected range of [{}, {}] is not finite",
            first, last
        ));
    }

    if first == last {
        first -= 0.5;
        last += 0.5;
    }

    let step = (last - first) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| first + step * i as f64).collect();
    edges.push(last);
    Ok(edges)
}

/// Sum the weights of the values falling into each bin.
///
/// Bins are half-open `[e_i, e_{i+1})` except the last, which also holds its
/// right edge. Values outside the edges and non-finite values are ignored.
pub fn weighted_counts(values: &[f64], weights: &[f64], edges: &[f64]) -> Vec<f64> {
    let n = edges.len().saturating_sub(1);
    let mut counts = vec![0.0; n];
    if n == 0 {
        return counts;
    }

    let first = edges[0];
    let last = edges[n];
    let span = last - first;

    for (&v, &w) in values.iter().zip(weights) {
        if !v.is_finite() || v < first || v > last {
            continue;
        }
        let mut idx = (((v - first) / span) * n as f64) as usize;
        if idx >= n {
            idx = n - 1;
        }
        // correct float rounding against the actual edges
        if v < edges[idx] && idx > 0 {
            idx -= 1;
        } else if idx + 1 < n && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += w;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges_basic() {
        let edges = bin_edges(&[0.0, 1.0, 4.0], 4).unwrap();
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_bin_edges_degenerate_range() {
        let edges = bin_edges(&[2.0, 2.0], 2).unwrap();
        assert_eq!(edges, vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_bin_edges_errors() {
        assert!(bin_edges(&[], 40).is_err());
        assert!(bin_edges(&[1.0], 0).is_err());
        assert!(bin_edges(&[1.0, f64::NEG_INFINITY], 40).is_err());
        assert!(bin_edges(&[1.0, f64::NAN], 40).is_err());
    }

    #[test]
    fn test_bin_edges_count_and_bounds() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let edges = bin_edges(&values, 40).unwrap();
        assert_eq!(edges.len(), 41);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[40], 99.0 * 0.37);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_weighted_counts() {
        let edges = vec![0.0, 1.0, 2.0];
        let values = [0.0, 0.5, 1.0, 2.0, 3.0, -1.0];
        let weights = [1.0, 2.0, 0.5, 0.25, 10.0, 10.0];
        let counts = weighted_counts(&values, &weights, &edges);
        // 2.0 lands in the closed last bin; 3.0 and -1.0 are outside
        assert_eq!(counts, vec![3.0, 0.75]);
    }

    #[test]
    fn test_weighted_counts_ignore_nan() {
        let edges = vec![0.0, 1.0];
        let counts = weighted_counts(&[0.5, f64::NAN], &[1.0, 1.0], &edges);
        assert_eq!(counts, vec![1.0]);
    }
}
