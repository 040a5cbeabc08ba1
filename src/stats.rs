//! Descriptive statistics over a sample of real numbers.
//!
//! Every function in this module is total: when a sample has too few
//! points to define the requested statistic, the result is `0.0` rather
//! than an error. Callers that must tell "degenerate" apart from
//! "legitimately zero" are expected to check the sample length first.
//!
//! # Algorithms
//!
//! - **Mean**: plain summation divided by `n`.
//! - **Variance/StdDev**: textbook two-pass formula with Bessel's
//!   correction (denominator `n − 1`).
//! - **Median**: sort a copy, take the middle (or the mean of the two
//!   middle elements).
//! - **Skewness/Kurtosis**: bias-corrected sample estimators (G₁, G₂),
//!   standardized by a caller-supplied mean and standard deviation.
//!   Reference: Joanes & Gill (1998), "Comparing measures of sample
//!   skewness and kurtosis", *The Statistician* 47(1), pp. 183–189.

/// Standard deviations below this are treated as zero by [`skewness`]
/// and [`kurtosis`].
pub const STD_DEV_EPSILON: f64 = 1e-10;

/// Computes the arithmetic mean `Σx / n`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `0.0` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        log::trace!("mean of empty sample, returning 0");
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Computes the sample variance with Bessel's correction (denominator `n − 1`).
///
/// The mean is computed internally; use [`variance_with_mean`] to supply
/// one that is already known.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `0.0` if `data.len() < 2`.
///
/// # Examples
/// ```
/// use u_numkit::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v) - 4.571428571428571).abs() < 1e-10);
/// assert_eq!(variance(&[1.0]), 0.0);
/// ```
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        log::trace!("variance needs at least 2 points, got {}", data.len());
        return 0.0;
    }
    variance_with_mean(data, mean(data))
}

/// Computes the sample variance around a caller-supplied `mean`.
///
/// The mean is used verbatim: it is neither recomputed nor validated.
/// Passing anything other than the sample mean yields the second moment
/// about that point, scaled by `1 / (n − 1)`.
///
/// # Returns
/// - `0.0` if `data.len() < 2`.
///
/// # Examples
/// ```
/// use u_numkit::stats::{mean, variance, variance_with_mean};
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let m = mean(&v);
/// assert_eq!(variance_with_mean(&v, m), variance(&v));
/// ```
pub fn variance_with_mean(data: &[f64], mean: f64) -> f64 {
    let n = data.len();
    if n < 2 {
        log::trace!("variance needs at least 2 points, got {n}");
        return 0.0;
    }
    let sum_sq: f64 = data.iter().map(|&x| (x - mean) * (x - mean)).sum();
    sum_sq / (n - 1) as f64
}

/// Computes the sample standard deviation.
///
/// Equivalent to `variance(data).sqrt()`, bit for bit.
///
/// # Returns
/// - `0.0` if `data.len() < 2`.
///
/// # Examples
/// ```
/// use u_numkit::stats::std_dev;
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 2.5_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Computes the sample standard deviation around a caller-supplied `mean`.
///
/// Equivalent to `variance_with_mean(data, mean).sqrt()`.
pub fn std_dev_with_mean(data: &[f64], mean: f64) -> f64 {
    variance_with_mean(data, mean).sqrt()
}

/// Returns the minimum value in the slice, or `0.0` if it is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), 1.0);
/// ```
pub fn min(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Returns the maximum value in the slice, or `0.0` if it is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), 5.0);
/// ```
pub fn max(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts the data ascending, then returns the middle element
/// (or the mean of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `0.0` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        log::trace!("median of empty sample, returning 0");
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Computes the bias-corrected sample skewness (g₁).
///
/// # Formula
/// ```text
/// g₁ = n / ((n−1)(n−2)) × Σ[(xᵢ − mean) / std_dev]³
/// ```
///
/// `mean` and `std_dev` are taken from the caller so that several moments
/// can share one pass over the data for each. With the sample mean and
/// sample standard deviation this matches Excel `SKEW()` and
/// `scipy.stats.skew(bias=False)`.
///
/// # Returns
/// - `0.0` if `data.len() < 3` or `std_dev < STD_DEV_EPSILON`.
///
/// # Examples
/// ```
/// use u_numkit::stats::{mean, skewness, std_dev};
/// let right = [1.0, 2.0, 3.0, 4.0, 50.0];
/// assert!(skewness(&right, mean(&right), std_dev(&right)) > 0.0);
///
/// let sym = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!(skewness(&sym, mean(&sym), std_dev(&sym)).abs() < 1e-14);
/// ```
pub fn skewness(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = data.len();
    if n < 3 || std_dev < STD_DEV_EPSILON {
        log::trace!("skewness undefined for n={n}, std_dev={std_dev}");
        return 0.0;
    }
    let nf = n as f64;
    let sum_z3: f64 = data
        .iter()
        .map(|&x| {
            let z = (x - mean) / std_dev;
            z * z * z
        })
        .sum();
    nf / ((nf - 1.0) * (nf - 2.0)) * sum_z3
}

/// Computes the sample excess kurtosis (G₂).
///
/// # Formula
/// ```text
/// G₂ = [n(n+1) / ((n−1)(n−2)(n−3))] × Σ[(xᵢ − mean) / std_dev]⁴ − 3(n−1)² / ((n−2)(n−3))
/// ```
///
/// Returns **0** for a normal distribution, positive for heavy tails
/// (leptokurtic), negative for light tails (platykurtic). Matches Excel
/// `KURT()` when given the sample mean and sample standard deviation.
///
/// # Returns
/// - `0.0` if `data.len() < 4` or `std_dev < STD_DEV_EPSILON`.
///
/// # Examples
/// ```
/// use u_numkit::stats::{kurtosis, mean, std_dev};
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let k = kurtosis(&data, mean(&data), std_dev(&data));
/// assert!((k - (-1.2)).abs() < 1e-9); // platykurtic
/// ```
pub fn kurtosis(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = data.len();
    if n < 4 || std_dev < STD_DEV_EPSILON {
        log::trace!("kurtosis undefined for n={n}, std_dev={std_dev}");
        return 0.0;
    }
    let nf = n as f64;
    // Σ[(xᵢ − x̄)/s]⁴
    let sum_z4: f64 = data
        .iter()
        .map(|&x| {
            let z = (x - mean) / std_dev;
            let z2 = z * z;
            z2 * z2
        })
        .sum();
    let a = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
    let b = 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));
    a * sum_z4 - b
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// All descriptive statistics of one sample, as produced by [`describe`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of points in the sample.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance (denominator `n − 1`).
    pub variance: f64,
    /// Square root of `variance`.
    pub std_dev: f64,
    /// Middle value of the sorted sample.
    pub median: f64,
    /// Bias-corrected skewness g₁ (0 when `count < 3`).
    pub skewness: f64,
    /// Excess kurtosis G₂ (0 when `count < 4`).
    pub kurtosis: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Computes every descriptive statistic of `data` in one call.
///
/// The mean is computed once and fed to [`variance_with_mean`],
/// [`skewness`] and [`kurtosis`]; each field follows the degenerate-input
/// rule of its own function, so e.g. a 3-point sample has a defined
/// skewness but a zero kurtosis.
///
/// # Returns
/// - `Summary::default()` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::describe;
/// let s = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(s.count, 5);
/// assert_eq!(s.mean, 3.0);
/// assert!((s.variance - 2.5).abs() < 1e-12);
/// assert_eq!(s.median, 3.0);
/// ```
pub fn describe(data: &[f64]) -> Summary {
    if data.is_empty() {
        return Summary::default();
    }
    let m = mean(data);
    let var = variance_with_mean(data, m);
    let sd = var.sqrt();
    Summary {
        count: data.len(),
        mean: m,
        variance: var,
        std_dev: sd,
        median: median(data),
        skewness: skewness(data, m, sd),
        kurtosis: kurtosis(data, m, sd),
        min: min(data),
        max: max(data),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
