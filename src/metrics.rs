//! Pointwise error metrics between two aligned samples.
//!
//! [`calculate_error`] pairs `actual[i]` with `predicted[i]` and reports
//! MAE, MSE, RMSE and MAPE in one bundle. Mismatched or empty input
//! yields the zero bundle; [`try_calculate_error`] reports the reason
//! instead.
//!
//! MAPE skips indices whose actual value is (near) zero, since the
//! percentage error is undefined there. Series with occasional zero
//! entries are therefore accepted without complaint.

/// Actual values with `|actual| <= MAPE_EPSILON` are excluded from MAPE.
pub const MAPE_EPSILON: f64 = 1e-10;

/// Reason an error-metrics input was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// `actual` and `predicted` have different lengths.
    LengthMismatch {
        actual_len: usize,
        predicted_len: usize,
    },
    /// Both samples are empty.
    Empty,
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::LengthMismatch {
                actual_len,
                predicted_len,
            } => write!(
                f,
                "actual and predicted must have equal length, got {actual_len} and {predicted_len}"
            ),
            MetricsError::Empty => write!(f, "error metrics need at least one pair"),
        }
    }
}

impl std::error::Error for MetricsError {}

/// Error metrics of a prediction against observed values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error, `√mse`.
    pub rmse: f64,
    /// Mean absolute percentage error, in percent.
    pub mape: f64,
}

impl ErrorMetrics {
    /// Whether every metric is zero.
    ///
    /// True both for rejected input and for a perfect prediction.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Computes MAE, MSE, RMSE and MAPE between `actual` and `predicted`.
///
/// # Formula
/// With `eᵢ = actual[i] − predicted[i]`:
/// ```text
/// mae  = Σ|eᵢ| / n
/// mse  = Σeᵢ² / n
/// rmse = √mse
/// mape = 100 · Σ|eᵢ / actual[i]| / k    over the k indices with |actual[i]| > 1e-10
/// ```
///
/// `mape` is `0.0` when no index qualifies.
///
/// # Returns
/// The zero bundle if the lengths differ or the samples are empty.
///
/// # Examples
/// ```
/// use u_numkit::metrics::calculate_error;
///
/// let m = calculate_error(&[1.0, 2.0, 3.0, 4.0], &[1.1, 1.9, 3.2, 3.8]);
/// assert!((m.mae - 0.15).abs() < 1e-9);
/// assert!((m.mse - 0.025).abs() < 1e-9);
/// assert!((m.mape - 6.666666666666667).abs() < 1e-9);
///
/// assert!(calculate_error(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_zero());
/// ```
pub fn calculate_error(actual: &[f64], predicted: &[f64]) -> ErrorMetrics {
    try_calculate_error(actual, predicted).unwrap_or_else(|err| {
        log::debug!("error metrics rejected input: {err}");
        ErrorMetrics::default()
    })
}

/// Computes the same metrics as [`calculate_error`], reporting rejected
/// input as an error.
///
/// # Errors
/// - [`MetricsError::LengthMismatch`] if the lengths differ.
/// - [`MetricsError::Empty`] if both samples are empty.
pub fn try_calculate_error(actual: &[f64], predicted: &[f64]) -> Result<ErrorMetrics, MetricsError> {
    let n = actual.len();
    if n != predicted.len() {
        return Err(MetricsError::LengthMismatch {
            actual_len: n,
            predicted_len: predicted.len(),
        });
    }
    if n == 0 {
        return Err(MetricsError::Empty);
    }

    let mut sum_abs = 0.0;
    let mut sum_sq = 0.0;
    let mut sum_pct = 0.0;
    let mut kept = 0_usize;
    for (&a, &p) in actual.iter().zip(predicted) {
        let e = a - p;
        sum_abs += e.abs();
        sum_sq += e * e;
        if a.abs() > MAPE_EPSILON {
            sum_pct += (e / a).abs();
            kept += 1;
        }
    }
    if kept < n {
        log::trace!("mape skipped {} zero-valued actuals", n - kept);
    }

    let nf = n as f64;
    let mse = sum_sq / nf;
    let mape = if kept > 0 {
        sum_pct / kept as f64 * 100.0
    } else {
        0.0
    };

    Ok(ErrorMetrics {
        mae: sum_abs / nf,
        mse,
        rmse: mse.sqrt(),
        mape,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
