use plotters::prelude::*;
use std::path::Path;

use super::{finish, DrawResult, IMAGE_SIZE};
use crate::error::Result;

/// Integer-aligned bins: one `(goals, matches)` pair per value in
/// `0..=max(totals)`. Counts sum to `totals.len()`.
///
/// Totals are bounded by twice `MAX_TEAM_GOALS` once rows are typed, so the
/// dense bin vector stays small.
pub fn histogram_bins(totals: &[u32]) -> Vec<(u32, u32)> {
    let max = totals.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0u32; max as usize + 1];
    for &t in totals {
        counts[t as usize] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(goals, n)| (goals as u32, n))
        .collect()
}

/// Histogram of total goals per match
pub fn plot_histogram(totals: &[u32], path: &Path) -> Result<()> {
    finish(path, draw_histogram(totals, path))
}

fn draw_histogram(totals: &[u32], path: &Path) -> DrawResult {
    let bins = histogram_bins(totals);
    let max_goals = bins.last().map(|(g, _)| *g).unwrap_or(0);
    let max_count = bins.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Goals per Match", ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..max_goals + 1).into_segmented(), 0u32..max_count + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Total goals")
        .y_desc("Number of matches")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.6).filled())
            .margin(2)
            .data(bins.iter().copied()),
    )?;

    // bar outlines
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLACK.stroke_width(1))
            .margin(2)
            .data(bins.iter().copied()),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_zero_to_max() {
        let bins = histogram_bins(&[3, 1, 4, 1, 0, 7]);
        assert_eq!(bins.len(), 8);
        assert_eq!(bins.first(), Some(&(0, 1)));
        assert_eq!(bins.last(), Some(&(7, 1)));
        assert_eq!(bins[1], (1, 2));
        assert_eq!(bins[2], (2, 0));
    }

    #[test]
    fn bin_counts_sum_to_match_count() {
        let totals: Vec<u32> = (0..64).map(|i| (i * 7 % 9) as u32).collect();
        let bins = histogram_bins(&totals);
        let sum: u32 = bins.iter().map(|(_, n)| n).sum();
        assert_eq!(sum as usize, totals.len());
    }

    #[test]
    fn all_goalless_is_single_bin() {
        assert_eq!(histogram_bins(&[0, 0, 0]), vec![(0, 3)]);
    }

    #[test]
    fn empty_input_has_one_empty_bin() {
        assert_eq!(histogram_bins(&[]), vec![(0, 0)]);
    }
}
