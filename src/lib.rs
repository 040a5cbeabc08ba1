//! # u-numkit
//!
//! Small numerical utilities: descriptive statistics, simple linear
//! regression, error metrics, and byte-level string helpers.
//!
//! Every function is pure and stateless. Degenerate input (too few
//! points, mismatched lengths, near-zero denominators) never panics and
//! never errors: it yields `0.0` or a zero-initialized result bundle.
//! Where the distinction matters, the `try_*` variants report the reason.
//!
//! ## Modules
//!
//! - [`stats`] — Mean, variance, standard deviation, median, skewness, kurtosis
//! - [`regression`] — Ordinary least squares `y = slope·x + intercept` with R², RMSE, residuals
//! - [`metrics`] — MAE, MSE, RMSE and MAPE between aligned samples
//! - [`strings`] — Trim, literal split, prefix/suffix tests
//!
//! ## Design Philosophy
//!
//! - **Fixed numerical contracts**: Bessel-corrected variance, regression
//!   RMSE over `n`, `1e-10` degeneracy thresholds
//! - **Textbook two-pass formulas**: results are reproducible bit for bit
//! - **Property-based testing**: Mathematical invariants verified via proptest
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for the result bundles

pub mod metrics;
pub mod regression;
pub mod stats;
pub mod strings;

pub use metrics::{calculate_error, try_calculate_error, ErrorMetrics, MetricsError};
pub use regression::{linear_regression, try_linear_regression, LinearRegression, RegressionError};
pub use stats::{describe, Summary};
