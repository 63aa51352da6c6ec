//! Distribution estimators shared by the summary table and the plots.
//!
//! Quantiles use linear interpolation between closest ranks, box whiskers
//! reach 1.5 IQR, histograms use Freedman–Diaconis binning and the density
//! estimate is a Gaussian KDE with Scott's bandwidth.

use polars::prelude::*;

use crate::error::{AnalysisError, Result};

/// Upper bound on histogram bins.
pub const MAX_BINS: usize = 50;

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Non-null values of a numeric column, in row order.
pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    Ok(column_options(df, column)?.into_iter().flatten().collect())
}

/// Values of a numeric column with nulls kept, so rows stay aligned with
/// other columns of the same table.
pub fn column_options(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let values = df
        .column(column)
        .map_err(|_| AnalysisError::MissingColumn(column.to_string()))?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

/// Ascending copy of `values` (NaN sorts last).
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Quantile `q` (0..=1) of ascending data, linearly interpolated.
///
/// Returns `None` for empty input.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1). `None` below two values.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

// ── Box summary ─────────────────────────────────────────────────────────────

/// Five-number box summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest observation within 1.5 IQR below `q1`
    pub whisker_low: f64,
    /// Highest observation within 1.5 IQR above `q3`
    pub whisker_high: f64,
    /// Observations beyond the whiskers
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// `None` for empty input.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let data = sorted(values);
        let q1 = quantile_sorted(&data, 0.25)?;
        let median = quantile_sorted(&data, 0.5)?;
        let q3 = quantile_sorted(&data, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let whisker_low = data
            .iter()
            .copied()
            .find(|v| *v >= low_fence)
            .unwrap_or(q1)
            .min(q1);
        let whisker_high = data
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .unwrap_or(q3)
            .max(q3);
        let outliers = data
            .iter()
            .copied()
            .filter(|v| *v < whisker_low || *v > whisker_high)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

// ── Histogram ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// Count normalised so the bars integrate to one
    pub density: f64,
}

/// Freedman–Diaconis bin count, capped at [`MAX_BINS`].
///
/// Falls back to √n bins when the IQR is zero.
pub fn freedman_diaconis_bins(values: &[f64]) -> usize {
    if values.len() < 2 {
        return 1;
    }
    let data = sorted(values);
    let iqr = quantile_sorted(&data, 0.75).unwrap_or(0.0) - quantile_sorted(&data, 0.25).unwrap_or(0.0);
    let width = 2.0 * iqr / (data.len() as f64).cbrt();

    let bins = if width == 0.0 {
        (data.len() as f64).sqrt() as usize
    } else {
        let range = data[data.len() - 1] - data[0];
        (range / width).ceil() as usize
    };
    bins.clamp(1, MAX_BINS)
}

/// Equal-width, density-normalised histogram. The last bin is closed.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = values.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
            density: count as f64 / (total * width),
        })
        .collect()
}

// ── Kernel density ──────────────────────────────────────────────────────────

/// Gaussian kernel density estimate with Scott's bandwidth.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    values: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// `None` when the data cannot support a bandwidth (fewer than two
    /// values, or zero spread).
    pub fn new(values: &[f64]) -> Option<Self> {
        let sd = std_dev(values)?;
        let bandwidth = sd * (values.len() as f64).powf(-0.2);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return None;
        }
        Some(Self {
            values: values.to_vec(),
            bandwidth,
        })
    }

    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * self.bandwidth);
        let sum: f64 = self
            .values
            .iter()
            .map(|v| {
                let z = (x - v) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum / self.values.len() as f64
    }

    /// Density sampled at `points` evenly spaced positions over `[lo, hi]`.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return vec![(lo, self.density(lo))];
        }
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + i as f64 * step;
                (x, self.density(x))
            })
            .collect()
    }

    /// Support extended by `cut` bandwidths beyond the data range.
    pub fn support(&self, cut: f64) -> (f64, f64) {
        let (lo, hi) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        (lo - cut * self.bandwidth, hi + cut * self.bandwidth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.25, 1.75)]
    #[case(0.5, 2.5)]
    #[case(0.75, 3.25)]
    #[case(1.0, 4.0)]
    fn test_quantile_linear_interpolation(#[case] q: f64, #[case] expected: f64) {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile_sorted(&data, q).unwrap(), expected));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn test_std_dev_is_sample_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population std is 2.0; sample std = sqrt(32 / 7)
        assert!(close(std_dev(&data).unwrap(), (32.0f64 / 7.0).sqrt()));
        assert_eq!(std_dev(&[1.0]), None);
    }

    #[test]
    fn test_box_summary_flags_outliers() {
        let mut data: Vec<f64> = (1..=10).map(f64::from).collect();
        data.push(100.0);
        let summary = BoxSummary::from_values(&data).unwrap();

        assert!(close(summary.median, 6.0));
        assert!(close(summary.q1, 3.5));
        assert!(close(summary.q3, 8.5));
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 10.0);
        assert_eq!(summary.outliers, vec![100.0]);
    }

    #[test]
    fn test_box_summary_single_value() {
        let summary = BoxSummary::from_values(&[5.0]).unwrap();
        assert_eq!(summary.whisker_low, 5.0);
        assert_eq!(summary.whisker_high, 5.0);
        assert!(summary.outliers.is_empty());
        assert!(BoxSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_freedman_diaconis_bins() {
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(freedman_diaconis_bins(&data), 5);

        // zero IQR falls back to sqrt(n)
        let flat = vec![3.0; 16];
        assert_eq!(freedman_diaconis_bins(&flat), 4);

        assert_eq!(freedman_diaconis_bins(&[1.0]), 1);
    }

    #[test]
    fn test_histogram_counts_and_density() {
        let data = [0.0, 1.0, 1.5, 2.0, 3.9, 4.0];
        let bins = histogram(&data, 4);

        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), data.len());
        assert_eq!(bins[3].count, 2); // max value lands in the closed last bin

        let area: f64 = bins.iter().map(|b| b.density * (b.end - b.start)).sum();
        assert!(close(area, 1.0));
    }

    #[test]
    fn test_histogram_constant_data() {
        let bins = histogram(&[2.0, 2.0], 1);
        assert_eq!(bins[0].start, 1.5);
        assert_eq!(bins[0].end, 2.5);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let data = [1.0, 2.0, 2.5, 3.0, 7.0, 8.0];
        let kde = GaussianKde::new(&data).unwrap();
        let (lo, hi) = kde.support(6.0);
        let curve = kde.curve(lo, hi, 2000);

        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn test_kde_scott_bandwidth() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::new(&data).unwrap();
        let expected = std_dev(&data).unwrap() * 5f64.powf(-0.2);
        assert!(close(kde.bandwidth, expected));
    }

    #[test]
    fn test_kde_degenerate_data() {
        assert!(GaussianKde::new(&[4.0]).is_none());
        assert!(GaussianKde::new(&[4.0, 4.0, 4.0]).is_none());
    }

    #[test]
    fn test_column_values_skips_nulls() {
        let df = df!("cost" => [Some(1.0), None, Some(3.0)]).unwrap();
        assert_eq!(column_values(&df, "cost").unwrap(), vec![1.0, 3.0]);
        assert!(matches!(
            column_values(&df, "other"),
            Err(AnalysisError::MissingColumn(_))
        ));
    }
}
