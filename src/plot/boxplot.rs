use plotters::prelude::*;
use std::path::Path;

use super::{finish, DrawResult, IMAGE_SIZE};
use crate::error::Result;

const LABEL: &str = "total_goals";

/// Values beyond the Tukey fences (1.5 × IQR), drawn as separate points.
pub fn outliers(totals: &[u32]) -> Vec<f32> {
    if totals.is_empty() {
        return Vec::new();
    }
    let values: Vec<f64> = totals.iter().map(|&g| g as f64).collect();
    let [lower, _, _, _, upper] = Quartiles::new(&values).values();
    values
        .iter()
        .map(|&v| v as f32)
        .filter(|&v| v < lower || v > upper)
        .collect()
}

/// Boxplot of total goals per match
pub fn plot_boxplot(totals: &[u32], path: &Path) -> Result<()> {
    finish(path, draw_boxplot(totals, path))
}

fn draw_boxplot(totals: &[u32], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if totals.is_empty() {
        root.present()?;
        return Ok(());
    }

    let values: Vec<f64> = totals.iter().map(|&g| g as f64).collect();
    let quartiles = Quartiles::new(&values);
    let [lower, _, _, _, upper] = quartiles.values();
    let max_goal = totals.iter().copied().max().unwrap_or(0) as f32;

    let y_min = lower.min(0.0) - 0.5;
    let y_max = upper.max(max_goal) + 0.5;

    let labels = [LABEL];
    let mut chart = ChartBuilder::on(&root)
        .caption("Total Goals Scored in Each Match", ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Total goals")
        .draw()?;

    chart.draw_series(std::iter::once(
        Boxplot::new_vertical(SegmentValue::CenterOf(&labels[0]), &quartiles)
            .width(80)
            .whisker_width(0.5)
            .style(BLUE.stroke_width(2)),
    ))?;

    chart.draw_series(
        outliers(totals)
            .into_iter()
            .map(|v| Circle::new((SegmentValue::CenterOf(&labels[0]), v), 4, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_outliers_in_tight_sample() {
        assert!(outliers(&[1, 2, 2, 3, 3, 3, 4]).is_empty());
    }

    #[test]
    fn lopsided_score_is_an_outlier() {
        // q1 = 2, q3 = 3, IQR = 1 → upper fence 4.5
        let out = outliers(&[2, 2, 2, 3, 3, 3, 2, 3, 9]);
        assert_eq!(out, vec![9.0]);
    }

    #[test]
    fn empty_has_no_outliers() {
        assert!(outliers(&[]).is_empty());
    }
}
