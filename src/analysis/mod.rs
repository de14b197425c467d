pub mod critical;
pub mod stats;

pub use critical::RejectionRegion;
pub use stats::{one_sample_t_test, TestSummary};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// Population mean is greater than the null mean
    Greater,
    /// Population mean is less than the null mean
    Less,
    /// Population mean differs from the null mean
    TwoSided,
}

impl std::fmt::Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Alternative::Greater => "greater",
            Alternative::Less => "less",
            Alternative::TwoSided => "two-sided",
        };
        f.write_str(s)
    }
}
