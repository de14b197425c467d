use plotters::prelude::*;
use std::path::Path;

use super::{finish, DrawResult, IMAGE_SIZE};
use crate::analysis::critical::{normal_curve, z_test_value};
use crate::analysis::{RejectionRegion, TestSummary};
use crate::error::Result;

const Z_RANGE: (f64, f64) = (-3.0, 3.0);
const CURVE_POINTS: usize = 1000;

/// A contiguous stretch of the density curve lying entirely inside or
/// entirely outside the rejection region.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    pub rejected: bool,
    pub points: Vec<(f64, f64)>,
}

/// Split `curve` wherever it crosses a critical value. The crossing point is
/// linearly interpolated and shared by both neighbouring segments, so the
/// shaded areas meet without a gap.
pub fn split_by_region(curve: &[(f64, f64)], region: &RejectionRegion) -> Vec<CurveSegment> {
    let mut segments: Vec<CurveSegment> = Vec::new();

    for &(x, y) in curve {
        let rejected = region.rejects(x);
        match segments.last_mut() {
            Some(seg) if seg.rejected == rejected => seg.points.push((x, y)),
            Some(seg) => {
                let (px, py) = seg.points.last().copied().unwrap_or((x, y));
                let boundary = region
                    .critical_values
                    .iter()
                    .copied()
                    .find(|c| (px..=x).contains(c))
                    .unwrap_or(x);
                let by = if x > px {
                    py + (y - py) * (boundary - px) / (x - px)
                } else {
                    y
                };
                seg.points.push((boundary, by));
                segments.push(CurveSegment {
                    rejected,
                    points: vec![(boundary, by), (x, y)],
                });
            }
            None => segments.push(CurveSegment {
                rejected,
                points: vec![(x, y)],
            }),
        }
    }

    segments
}

/// Clamp a marker to the plotted z range. The flag reports whether the value
/// had to be moved (including ±∞); NaN yields `None`.
pub fn clamp_marker(z: f64) -> Option<(f64, bool)> {
    if z.is_nan() {
        return None;
    }
    let clamped = z.clamp(Z_RANGE.0, Z_RANGE.1);
    Some((clamped, clamped != z))
}

/// Standard normal curve with the test value and critical value(s) marked and
/// the rejection region shaded.
pub fn plot_critical_region(
    summary: &TestSummary,
    region: &RejectionRegion,
    path: &Path,
) -> Result<()> {
    let curve = normal_curve(Z_RANGE.0, Z_RANGE.1, CURVE_POINTS)?;
    finish(path, draw_critical_region(summary, region, &curve, path))
}

fn draw_critical_region(
    summary: &TestSummary,
    region: &RejectionRegion,
    curve: &[(f64, f64)],
    path: &Path,
) -> DrawResult {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = curve.iter().map(|(_, y)| *y).fold(0.0f64, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Test Value and Critical Value", ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(Z_RANGE.0..Z_RANGE.1, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("z")
        .y_desc("Probability density")
        .draw()?;

    let reject_style = GREEN.mix(0.3);
    let keep_style = BLUE.mix(0.1);
    let mut reject_labelled = false;
    let mut keep_labelled = false;

    for seg in split_by_region(curve, region) {
        let style = if seg.rejected { reject_style } else { keep_style };
        let area = chart.draw_series(AreaSeries::new(seg.points, 0.0, style))?;
        if seg.rejected && !reject_labelled {
            area.label("Reject region")
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], reject_style.filled()));
            reject_labelled = true;
        } else if !seg.rejected && !keep_labelled {
            area.label("Do not reject region")
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], keep_style.filled()));
            keep_labelled = true;
        }
    }

    chart
        .draw_series(LineSeries::new(curve.iter().copied(), &BLACK))?
        .label("Normal distribution")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLACK));

    for (i, c) in region.critical_values.iter().enumerate() {
        let Some((cx, moved)) = clamp_marker(*c) else {
            continue;
        };
        let series = chart.draw_series(LineSeries::new(
            vec![(cx, 0.0), (cx, y_max)],
            GREEN.stroke_width(2),
        ))?;
        if i == 0 {
            let off = if moved { " (off scale)" } else { "" };
            let text = match region.critical_values.as_slice() {
                [_, hi] => format!("Critical value = ±{:.3}{}", hi.abs(), off),
                _ => format!("Critical value = {:.3}{}", c, off),
            };
            series
                .label(text)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN.stroke_width(2)));
        }
    }

    let z = z_test_value(summary);
    if let Some((zx, moved)) = clamp_marker(z) {
        let off = if moved { " (off scale)" } else { "" };
        chart
            .draw_series(LineSeries::new(
                vec![(zx, 0.0), (zx, y_max)],
                RED.stroke_width(2),
            ))?
            .label(format!("Test value = {:.4}{}", z, off))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
