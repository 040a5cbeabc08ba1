//! Simple linear regression.
//!
//! Ordinary least squares fit of `y ≈ slope·x + intercept` via the
//! closed-form normal equations, with R², RMSE and per-sample residuals.
//!
//! Two entry points share one computation:
//!
//! - [`linear_regression`] never fails; rejected input yields the zero
//!   bundle (`LinearRegression::default()`).
//! - [`try_linear_regression`] reports *why* input was rejected.
//!
//! # Examples
//!
//! ```
//! use u_numkit::regression::linear_regression;
//!
//! let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!(fit.intercept.abs() < 1e-12);
//! assert!((fit.r2 - 1.0).abs() < 1e-12);
//! ```

/// `|n·Σx² − (Σx)²|` below this means `x` is essentially constant.
pub const DENOMINATOR_EPSILON: f64 = 1e-10;

/// Reason a regression input was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// `x` and `y` have different lengths.
    LengthMismatch { x_len: usize, y_len: usize },
    /// Fewer than two points.
    TooFewPoints { n: usize },
    /// `x` is (near-)constant, so the slope is undefined.
    DegenerateX { denominator: f64 },
}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::LengthMismatch { x_len, y_len } => {
                write!(f, "x and y must have equal length, got {x_len} and {y_len}")
            }
            RegressionError::TooFewPoints { n } => {
                write!(f, "regression needs at least 2 points, got {n}")
            }
            RegressionError::DegenerateX { denominator } => {
                write!(f, "x is constant (normal-equation denominator {denominator:e})")
            }
        }
    }
}

impl std::error::Error for RegressionError {}

/// Result of a simple linear regression: `y = slope·x + intercept`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, `1 − SS_res/SS_tot` (0 when `SS_tot = 0`).
    pub r2: f64,
    /// Root mean squared residual, `√(SS_res / n)`.
    pub rmse: f64,
    /// `y[i] − (slope·x[i] + intercept)`, in input order.
    pub residuals: Vec<f64>,
}

impl LinearRegression {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluates the fitted line at every point of `xs`.
    pub fn fitted(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Whether this is the zero bundle returned for rejected input.
    ///
    /// A genuine fit of `y = 0` on at least two points still carries its
    /// residuals, so it is not reported as zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Fits `y ≈ slope·x + intercept` by ordinary least squares.
///
/// # Algorithm
/// ```text
/// D         = n·Σx² − (Σx)²
/// slope     = (n·Σxy − Σx·Σy) / D
/// intercept = (Σy − slope·Σx) / n
/// rmse      = √(SS_res / n)
/// ```
///
/// The RMSE divisor is `n`, not the unbiased `n − 2`.
///
/// # Returns
/// The zero bundle (all scalars `0.0`, empty residuals) if the lengths
/// differ, `n < 2`, or `|D| < DENOMINATOR_EPSILON`.
///
/// # Examples
/// ```
/// use u_numkit::regression::linear_regression;
///
/// let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0]);
/// assert!((fit.slope - 1.1).abs() < 1e-9);
/// assert!((fit.intercept - 1.1).abs() < 1e-9);
/// assert_eq!(fit.residuals.len(), 4);
///
/// // Constant x is rejected.
/// assert!(linear_regression(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).is_zero());
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> LinearRegression {
    try_linear_regression(x, y).unwrap_or_else(|err| {
        log::debug!("linear regression rejected input: {err}");
        LinearRegression::default()
    })
}

/// Fits `y ≈ slope·x + intercept`, reporting rejected input as an error.
///
/// Identical to [`linear_regression`] on accepted input.
///
/// # Errors
/// - [`RegressionError::LengthMismatch`] if `x.len() != y.len()`.
/// - [`RegressionError::TooFewPoints`] if `n < 2`.
/// - [`RegressionError::DegenerateX`] if `|n·Σx² − (Σx)²| < DENOMINATOR_EPSILON`.
///
/// # Examples
/// ```
/// use u_numkit::regression::{try_linear_regression, RegressionError};
///
/// assert_eq!(
///     try_linear_regression(&[1.0, 2.0], &[3.0]),
///     Err(RegressionError::LengthMismatch { x_len: 2, y_len: 1 })
/// );
/// ```
pub fn try_linear_regression(x: &[f64], y: &[f64]) -> Result<LinearRegression, RegressionError> {
    let n = x.len();
    if n != y.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: n,
            y_len: y.len(),
        });
    }
    if n < 2 {
        return Err(RegressionError::TooFewPoints { n });
    }

    let nf = n as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_xx += xi * xi;
    }

    let denominator = nf * sum_xx - sum_x * sum_x;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return Err(RegressionError::DegenerateX { denominator });
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    let residuals: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| yi - (slope * xi + intercept))
        .collect();

    let y_mean = sum_y / nf;
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean) * (yi - y_mean)).sum();

    let r2 = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
    let rmse = (ss_res / nf).sqrt();

    Ok(LinearRegression {
        slope,
        intercept,
        r2,
        rmse,
        residuals,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    // --- exact fits ---

    #[test]
    fn test_perfect_line() {
        let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!(fit.intercept.abs() < TOL);
        assert!((fit.r2 - 1.0).abs() < TOL);
        assert!(fit.rmse.abs() < TOL);
        assert_eq!(fit.residuals.len(), 4);
        assert!(fit.residuals.iter().all(|r| r.abs() < TOL));
    }

    #[test]
    fn test_noisy_line() {
        // Σx=6, Σy=11, Σxy=22, Σx²=14, D=20
        let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0]);
        assert!((fit.slope - 1.1).abs() < TOL);
        assert!((fit.intercept - 1.1).abs() < TOL);
        let sum: f64 = fit.residuals.iter().sum();
        assert!(sum.abs() < TOL);
        // residuals: -0.1, 0.8, -1.3, 0.6 → SS_res = 2.7, SS_tot = 8.75
        assert!((fit.r2 - (1.0 - 2.7 / 8.75)).abs() < TOL);
        assert!((fit.rmse - (2.7_f64 / 4.0).sqrt()).abs() < TOL);
    }

    #[test]
    fn test_two_points() {
        let fit = linear_regression(&[0.0, 2.0], &[1.0, 5.0]);
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 1.0).abs() < TOL);
        assert!((fit.r2 - 1.0).abs() < TOL);
    }

    #[test]
    fn test_constant_y_has_zero_r2() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]);
        assert!(fit.slope.abs() < TOL);
        assert!((fit.intercept - 4.0).abs() < TOL);
        assert_eq!(fit.r2, 0.0);
        assert_eq!(fit.residuals.len(), 3);
        assert!(!fit.is_zero());
    }

    #[test]
    fn test_residuals_in_input_order() {
        let fit = linear_regression(&[3.0, 0.0, 1.0, 2.0], &[5.0, 1.0, 3.0, 2.0]);
        assert!((fit.residuals[0] - 0.6).abs() < TOL);
        assert!((fit.residuals[1] - (-0.1)).abs() < TOL);
        assert!((fit.residuals[2] - 0.8).abs() < TOL);
        assert!((fit.residuals[3] - (-1.3)).abs() < TOL);
    }

    // --- predict / fitted ---

    #[test]
    fn test_predict_and_fitted() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]);
        assert!((fit.predict(10.0) - 21.0).abs() < TOL);
        let xs = [1.0, 2.0, 3.0];
        let fitted = fit.fitted(&xs);
        for ((f, y), r) in fitted.iter().zip([3.0, 5.0, 7.0]).zip(&fit.residuals) {
            assert!((y - f - r).abs() < TOL);
        }
    }

    // --- rejected input ---

    #[test]
    fn test_zero_bundle_cases() {
        assert!(linear_regression(&[], &[]).is_zero());
        assert!(linear_regression(&[1.0], &[2.0]).is_zero());
        assert!(linear_regression(&[1.0, 2.0], &[3.0]).is_zero());
        assert!(linear_regression(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).is_zero());
        assert_eq!(
            linear_regression(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]),
            LinearRegression::default()
        );
    }

    #[test]
    fn test_near_constant_x_is_rejected() {
        // D = (1e-6)² ≈ 1e-12, below the threshold but not exactly zero.
        let x = [1.0, 1.0 + 1e-6];
        assert!(linear_regression(&x, &[2.0, 3.0]).is_zero());
        match try_linear_regression(&x, &[2.0, 3.0]) {
            Err(RegressionError::DegenerateX { denominator }) => {
                assert!(denominator != 0.0 && denominator.abs() < DENOMINATOR_EPSILON);
            }
            other => panic!("expected DegenerateX, got {other:?}"),
        }
    }

    #[test]
    fn test_small_spread_above_threshold_is_fitted() {
        // D = (1e-4)² ≈ 1e-8
        let fit = linear_regression(&[1.0, 1.0 + 1e-4], &[2.0, 3.0]);
        assert!(!fit.is_zero());
        assert_eq!(fit.residuals.len(), 2);
        assert!((fit.slope - 1e4).abs() < 1.0);
    }

    #[test]
    fn test_try_errors() {
        assert_eq!(
            try_linear_regression(&[1.0, 2.0], &[3.0]),
            Err(RegressionError::LengthMismatch { x_len: 2, y_len: 1 })
        );
        assert_eq!(
            try_linear_regression(&[1.0], &[2.0]),
            Err(RegressionError::TooFewPoints { n: 1 })
        );
        assert_eq!(
            try_linear_regression(&[], &[]),
            Err(RegressionError::TooFewPoints { n: 0 })
        );
        assert!(matches!(
            try_linear_regression(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]),
            Err(RegressionError::DegenerateX { .. })
        ));
    }

    #[test]
    fn test_try_matches_sentinel_on_accepted_input() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0, 5.0];
        assert_eq!(try_linear_regression(&x, &y), Ok(linear_regression(&x, &y)));
    }

    #[test]
    fn test_error_display() {
        let msg = RegressionError::TooFewPoints { n: 1 }.to_string();
        assert_eq!(msg, "regression needs at least 2 points, got 1");
        let msg = RegressionError::LengthMismatch { x_len: 2, y_len: 3 }.to_string();
        assert!(msg.contains("2") && msg.contains("3"));
    }
}
