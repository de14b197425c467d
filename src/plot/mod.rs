pub mod boxplot;
pub mod critical_region;
pub mod histogram;

pub use boxplot::plot_boxplot;
pub use critical_region::plot_critical_region;
pub use histogram::plot_histogram;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::{RejectionRegion, TestSummary};
use crate::error::{AnalysisError, Result};

/// Output image size shared by all plots
pub(crate) const IMAGE_SIZE: (u32, u32) = (800, 600);

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Destination files of the three diagnostic plots
#[derive(Debug, Clone)]
pub struct PlotPaths {
    pub boxplot: PathBuf,
    pub histogram: PathBuf,
    pub critical: PathBuf,
}

/// Render the boxplot, histogram and critical-region plot, overwriting any
/// existing files. Returns the written paths in that order.
pub fn render_all(
    totals: &[u32],
    summary: &TestSummary,
    region: &RejectionRegion,
    paths: &PlotPaths,
) -> Result<Vec<PathBuf>> {
    plot_boxplot(totals, &paths.boxplot)?;
    plot_histogram(totals, &paths.histogram)?;
    plot_critical_region(summary, region, &paths.critical)?;

    let written = vec![
        paths.boxplot.clone(),
        paths.histogram.clone(),
        paths.critical.clone(),
    ];
    for p in &written {
        info!("Plot written: {}", p.display());
    }
    Ok(written)
}

/// Map a plotters failure onto the pipeline error, naming the file.
fn finish(path: &Path, result: DrawResult) -> Result<()> {
    result.map_err(|e| AnalysisError::Plot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{one_sample_t_test, Alternative};

    const TOTALS: [u32; 10] = [3, 1, 4, 2, 0, 5, 2, 3, 1, 6];

    fn paths_in(dir: &Path) -> PlotPaths {
        PlotPaths {
            boxplot: dir.join("boxplot.png"),
            histogram: dir.join("histogram.png"),
            critical: dir.join("test_critical_value.png"),
        }
    }

    fn file_len(path: &Path) -> u64 {
        std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    #[test]
    fn renders_all_three_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let summary = one_sample_t_test(&TOTALS, 2.0, Alternative::Greater).unwrap();
        let region = RejectionRegion::new(0.05, Alternative::Greater).unwrap();

        let written = render_all(&TOTALS, &summary, &region, &paths).unwrap();

        assert_eq!(written, vec![paths.boxplot.clone(), paths.histogram.clone(), paths.critical.clone()]);
        for p in &written {
            assert!(file_len(p) > 0, "{} is missing or empty", p.display());
        }
    }

    #[test]
    fn rendering_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.histogram, b"stale").unwrap();

        let summary = one_sample_t_test(&TOTALS, 2.0, Alternative::TwoSided).unwrap();
        let region = RejectionRegion::new(0.05, Alternative::TwoSided).unwrap();
        render_all(&TOTALS, &summary, &region, &paths).unwrap();

        let bytes = std::fs::read(&paths.histogram).unwrap();
        assert_ne!(bytes, b"stale");
        // PNG signature
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn renders_zero_variance_sample_with_off_scale_marker() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let totals = [3, 3];
        let summary = one_sample_t_test(&totals, 2.0, Alternative::Greater).unwrap();
        let region = RejectionRegion::new(0.05, Alternative::Greater).unwrap();

        render_all(&totals, &summary, &region, &paths).unwrap();
        assert!(file_len(&paths.critical) > 0);
    }
}
