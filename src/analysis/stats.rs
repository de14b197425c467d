//! Descriptive statistics and the one-sample t-test on goals per match.
//!
//! The test compares the sample mean of total goals against a fixed null mean:
//!
//!   t = (x̄ − μ₀) / (s / √n)
//!
//! where `s` is the Bessel-corrected (n − 1) sample standard deviation. The
//! p-value comes from a Student t distribution with n − 1 degrees of freedom,
//! taking the tail(s) selected by [`Alternative`].

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::debug;

use super::Alternative;
use crate::error::{AnalysisError, Result};

/// Result of the one-sample t-test. Computed once and passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    pub n: usize,
    pub null_mean: f64,
    pub alternative: Alternative,
    pub mean_goals: f64,
    pub std_dev_goals: f64,
    #[serde(with = "non_finite")]
    pub t_stat: f64,
    #[serde(with = "non_finite")]
    pub p_value: f64,
}

/// JSON has no ±∞ or NaN, and serde_json writes them as `null`. These fields
/// carry them as the strings `"inf"`, `"-inf"` and `"NaN"` instead.
mod non_finite {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            s.serialize_str("NaN")
        } else if *value == f64::INFINITY {
            s.serialize_str("inf")
        } else if *value == f64::NEG_INFINITY {
            s.serialize_str("-inf")
        } else {
            s.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(t) => match t.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(de::Error::custom(format!("invalid float '{other}'"))),
            },
        }
    }
}

impl TestSummary {
    /// Standard error of the mean, `s / √n`.
    pub fn standard_error(&self) -> f64 {
        self.std_dev_goals / (self.n as f64).sqrt()
    }

    /// Whether the null hypothesis is rejected at `alpha`.
    /// A NaN p-value never rejects.
    pub fn rejects_null(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Run a one-sample t-test of `totals` against `null_mean`.
///
/// Fewer than two observations leave the sample variance undefined and are
/// rejected. Zero variance is not an error: the statistic becomes ±∞ (or NaN
/// when the mean equals the null mean) and the p-value follows from it.
pub fn one_sample_t_test(
    totals: &[u32],
    null_mean: f64,
    alternative: Alternative,
) -> Result<TestSummary> {
    let n = totals.len();
    if n < 2 {
        return Err(AnalysisError::InsufficientSample(n));
    }

    let values: Vec<f64> = totals.iter().map(|&g| g as f64).collect();
    let mean = values.iter().mean();
    let std_dev = values.iter().std_dev();

    let t_stat = (mean - null_mean) / (std_dev / (n as f64).sqrt());
    let p_value = p_value(t_stat, (n - 1) as f64, alternative)?;

    debug!(
        "t-test: n={} mean={:.4} sd={:.4} t={:.4} p={:.6}",
        n, mean, std_dev, t_stat, p_value
    );

    Ok(TestSummary {
        n,
        null_mean,
        alternative,
        mean_goals: mean,
        std_dev_goals: std_dev,
        t_stat,
        p_value,
    })
}

/// Tail probability of `t` under Student t with `df` degrees of freedom.
pub fn p_value(t: f64, df: f64, alternative: Alternative) -> Result<f64> {
    if t.is_nan() {
        return Ok(f64::NAN);
    }

    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| AnalysisError::Distribution(e.to_string()))?;

    let upper = |x: f64| {
        if x == f64::INFINITY {
            0.0
        } else if x == f64::NEG_INFINITY {
            1.0
        } else {
            dist.sf(x)
        }
    };
    let lower = |x: f64| {
        if x == f64::INFINITY {
            1.0
        } else if x == f64::NEG_INFINITY {
            0.0
        } else {
            dist.cdf(x)
        }
    };

    let p = match alternative {
        Alternative::Greater => upper(t),
        Alternative::Less => lower(t),
        Alternative::TwoSided => (2.0 * upper(t.abs())).min(1.0),
    };
    Ok(p)
}
