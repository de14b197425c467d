//! Normal-approximation critical values and rejection regions.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use super::{Alternative, TestSummary};
use crate::error::{AnalysisError, Result};

/// Critical z thresholds for one significance level and tail direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionRegion {
    pub alpha: f64,
    pub alternative: Alternative,
    /// One value for one-tailed tests, `[-z, z]` for two-sided.
    pub critical_values: Vec<f64>,
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| AnalysisError::Distribution(e.to_string()))
}

impl RejectionRegion {
    pub fn new(alpha: f64, alternative: Alternative) -> Result<Self> {
        let normal = standard_normal()?;
        let critical_values = match alternative {
            Alternative::Greater => vec![normal.inverse_cdf(1.0 - alpha)],
            Alternative::Less => vec![normal.inverse_cdf(alpha)],
            Alternative::TwoSided => {
                let z = normal.inverse_cdf(1.0 - alpha / 2.0);
                vec![-z, z]
            }
        };
        Ok(Self {
            alpha,
            alternative,
            critical_values,
        })
    }

    /// Whether `z` falls in the rejection region. NaN is never rejected.
    pub fn rejects(&self, z: f64) -> bool {
        match (self.alternative, self.critical_values.as_slice()) {
            (Alternative::Greater, [c]) => z > *c,
            (Alternative::Less, [c]) => z < *c,
            (Alternative::TwoSided, [lo, hi]) => z < *lo || z > *hi,
            _ => false,
        }
    }
}

/// z test value `(x̄ − μ₀) / (s / √n)`, the statistic the critical-region plot
/// places against the standard normal curve.
pub fn z_test_value(summary: &TestSummary) -> f64 {
    (summary.mean_goals - summary.null_mean) / summary.standard_error()
}

/// Standard normal density sampled at `points` evenly spaced x values on
/// `[lo, hi]`, endpoints included.
pub fn normal_curve(lo: f64, hi: f64, points: usize) -> Result<Vec<(f64, f64)>> {
    let normal = standard_normal()?;
    if points < 2 {
        return Ok(vec![(lo, normal.pdf(lo))]);
    }
    let step = (hi - lo) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, normal.pdf(x))
        })
        .collect())
}
