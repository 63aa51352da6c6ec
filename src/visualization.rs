//! Visualization module: static PNG charts of the working table.
//!
//! Three chart kinds, each written to its own file with the bitmap backend:
//! - Box plot stacked above a histogram + density curve for one column
//! - Violins of one column split by a grouping column
//! - Scatter of two columns coloured by a grouping column
//!
//! File names are derived from a job index assigned by the caller, so the
//! renderers themselves are stateless.

use std::collections::HashMap;
use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use thiserror::Error;

use crate::distribution::{
    column_options, column_values, freedman_diaconis_bins, histogram, BoxSummary, GaussianKde,
};
use crate::error::{AnalysisError, Result};
use crate::pipeline::group_labels;

/// Share of the canvas height given to the box plot above the distribution.
const BOX_HEIGHT_RATIO: f64 = 0.15;
/// Density curve extends this many bandwidths past the data.
const KDE_CUT: f64 = 3.0;
const KDE_POINTS: usize = 200;
/// Violin width in category units.
const VIOLIN_WIDTH: f64 = 0.5;
/// Half-size of a scatter diamond, in pixels.
const MARKER_RADIUS: i32 = 7;
const Y_LABEL_AREA: u32 = 90;
const MARGIN: u32 = 20;

/// Fill used for single-series charts.
const BASE_COLOR: RGBColor = RGBColor(76, 114, 176);

/// Colour-blind friendly categorical palette.
const COLORBLIND: [RGBColor; 10] = [
    RGBColor(1, 115, 178),
    RGBColor(222, 143, 5),
    RGBColor(2, 158, 115),
    RGBColor(213, 94, 0),
    RGBColor(204, 120, 188),
    RGBColor(202, 145, 97),
    RGBColor(251, 175, 228),
    RGBColor(148, 148, 148),
    RGBColor(236, 225, 51),
    RGBColor(86, 180, 233),
];

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

// ── Jobs ────────────────────────────────────────────────────────────────────

/// What a single plot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotKind {
    BoxWithDistribution { value: String },
    Violin { value: String, split: String },
    Scatter { x: String, y: String, hue: String },
}

/// One plot in the run's sequence; `index` (1-based) prefixes the file name.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotJob {
    pub index: usize,
    pub kind: PlotKind,
}

impl PlotJob {
    pub fn file_name(&self) -> String {
        match &self.kind {
            PlotKind::BoxWithDistribution { value } => format!("({}){}-All.png", self.index, value),
            PlotKind::Violin { value, split } => {
                format!("({}){} by {}.png", self.index, value, split)
            }
            PlotKind::Scatter { x, y, .. } => format!("({}){}_v_{}.png", self.index, y, x),
        }
    }

    /// Draw the plot into `path`.
    pub fn render(&self, df: &DataFrame, path: &Path, size: (u32, u32)) -> Result<()> {
        match &self.kind {
            PlotKind::BoxWithDistribution { value } => plot_box_w_dist(df, value, path, size),
            PlotKind::Violin { value, split } => plot_violin(df, value, split, path, size),
            PlotKind::Scatter { x, y, hue } => plot_scatter(df, x, y, hue, path, size),
        }
    }
}

// ── Box plot over distribution ──────────────────────────────────────────────

/// Box plot of `value` stacked above its histogram and density curve.
/// Both panels share the x range.
pub fn plot_box_w_dist(df: &DataFrame, value: &str, path: &Path, size: (u32, u32)) -> Result<()> {
    let values = column_values(df, value)?;
    let summary = BoxSummary::from_values(&values)
        .ok_or_else(|| AnalysisError::EmptyResult(format!("plotting {value}")))?;

    let bins = histogram(&values, freedman_diaconis_bins(&values));
    let curve = GaussianKde::new(&values)
        .map(|kde| {
            let (lo, hi) = kde.support(KDE_CUT);
            kde.curve(lo, hi, KDE_POINTS)
        })
        .unwrap_or_default();

    let mut x_lo = bins.first().map_or(summary.whisker_low, |b| b.start);
    let mut x_hi = bins.last().map_or(summary.whisker_high, |b| b.end);
    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        x_lo = x_lo.min(first.0);
        x_hi = x_hi.max(last.0);
    }
    let x_range = padded_range(x_lo, x_hi, 0.02);

    let y_max = bins
        .iter()
        .map(|b| b.density)
        .chain(curve.iter().map(|p| p.1))
        .fold(0.0, f64::max);
    let y_range = 0.0..positive_or_one(y_max * 1.05);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let box_height = (size.1 as f64 * BOX_HEIGHT_RATIO) as i32;
    let (upper, lower) = root.split_vertically(box_height);

    // ── Box panel ───────────────────────────────────────────────────────
    let mut box_chart = ChartBuilder::on(&upper)
        .margin(MARGIN)
        .margin_bottom(0)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range.clone(), 0f64..1f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    box_chart
        .draw_series(std::iter::once(Rectangle::new(
            [(summary.q1, 0.2), (summary.q3, 0.8)],
            BASE_COLOR.filled(),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    box_chart
        .draw_series(box_outline(&summary))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    box_chart
        .draw_series(
            summary
                .outliers
                .iter()
                .map(|v| Circle::new((*v, 0.5), 3, BLACK.stroke_width(1))),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // ── Distribution panel ──────────────────────────────────────────────
    let mut dist_chart = ChartBuilder::on(&lower)
        .margin(MARGIN)
        .margin_top(0)
        .x_label_area_size(60)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    dist_chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(value)
        .y_desc("Density")
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    dist_chart
        .draw_series(bins.iter().filter(|b| b.count > 0).map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.density)], BASE_COLOR.mix(0.4).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    dist_chart
        .draw_series(LineSeries::new(curve, BASE_COLOR.stroke_width(2)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Box border, median, whiskers and caps for a horizontal box at y 0.2..0.8.
fn box_outline(summary: &BoxSummary) -> Vec<PathElement<(f64, f64)>> {
    let style = BLACK.stroke_width(2);
    vec![
        PathElement::new(
            vec![
                (summary.q1, 0.2),
                (summary.q3, 0.2),
                (summary.q3, 0.8),
                (summary.q1, 0.8),
                (summary.q1, 0.2),
            ],
            style,
        ),
        PathElement::new(vec![(summary.median, 0.2), (summary.median, 0.8)], style),
        PathElement::new(vec![(summary.whisker_low, 0.5), (summary.q1, 0.5)], style),
        PathElement::new(vec![(summary.q3, 0.5), (summary.whisker_high, 0.5)], style),
        PathElement::new(
            vec![(summary.whisker_low, 0.35), (summary.whisker_low, 0.65)],
            style,
        ),
        PathElement::new(
            vec![(summary.whisker_high, 0.35), (summary.whisker_high, 0.65)],
            style,
        ),
    ]
}

// ── Violin ──────────────────────────────────────────────────────────────────

/// One violin per `split` group of `value`, groups in first-appearance order.
pub fn plot_violin(
    df: &DataFrame,
    value: &str,
    split: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let groups = split_by_group(&group_labels(df, split)?, &column_options(df, value)?);
    if groups.iter().all(|(_, v)| v.is_empty()) {
        return Err(AnalysisError::EmptyResult(format!(
            "plotting {value} by {split}"
        )));
    }

    // Density cut at the data range of each group.
    let curves: Vec<Option<Vec<(f64, f64)>>> = groups
        .iter()
        .map(|(_, values)| {
            GaussianKde::new(values).map(|kde| {
                let (lo, hi) = kde.support(0.0);
                kde.curve(lo, hi, KDE_POINTS)
            })
        })
        .collect();
    let max_density = curves
        .iter()
        .flatten()
        .flat_map(|c| c.iter().map(|p| p.1))
        .fold(0.0, f64::max);
    let half_width_scale = if max_density > 0.0 {
        (VIOLIN_WIDTH / 2.0) / max_density
    } else {
        0.0
    };

    let (y_lo, y_hi) = bounds(groups.iter().flat_map(|(_, v)| v.iter().copied()));
    let y_range = padded_range(y_lo, y_hi, 0.05);
    let names: Vec<String> = groups.iter().map(|(name, _)| name.clone()).collect();
    let x_range = -0.5..(groups.len() as f64 - 0.5);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .x_label_area_size(140)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let category = |x: &f64| category_label(&names, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 2)
        .x_label_formatter(&category)
        .x_label_style(
            ("sans-serif", 18)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style(("sans-serif", 18))
        .x_desc(split)
        .y_desc(value)
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (i, ((_, values), curve)) in groups.iter().zip(&curves).enumerate() {
        let center = i as f64;
        let color = palette_color(i);

        match curve {
            Some(curve) => {
                let outline = violin_outline(center, curve, half_width_scale);
                chart
                    .draw_series(std::iter::once(Polygon::new(
                        outline.clone(),
                        color.mix(0.9).filled(),
                    )))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        outline,
                        BLACK.stroke_width(1),
                    )))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
            }
            None => {
                // No spread to estimate a density from: one line per value.
                chart
                    .draw_series(values.iter().map(|v| {
                        PathElement::new(
                            vec![
                                (center - VIOLIN_WIDTH / 2.0, *v),
                                (center + VIOLIN_WIDTH / 2.0, *v),
                            ],
                            color.stroke_width(2),
                        )
                    }))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
            }
        }

        if let Some(summary) = BoxSummary::from_values(values) {
            draw_inner_box(&mut chart, center, &summary)?;
        }
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Closed outline of a vertical violin centred at `center`.
fn violin_outline(center: f64, curve: &[(f64, f64)], scale: f64) -> Vec<(f64, f64)> {
    let right = curve.iter().map(|(y, d)| (center + d * scale, *y));
    let left = curve.iter().rev().map(|(y, d)| (center - d * scale, *y));
    let mut points: Vec<(f64, f64)> = right.chain(left).collect();
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

/// Whisker line, IQR bar and median dot inside a violin.
fn draw_inner_box<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    center: f64,
    summary: &BoxSummary,
) -> Result<()> {
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(center, summary.whisker_low), (center, summary.whisker_high)],
            BLACK.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(center - 0.02, summary.q1), (center + 0.02, summary.q3)],
            BLACK.filled(),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(std::iter::once(Circle::new(
            (center, summary.median),
            4,
            WHITE.filled(),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

// ── Scatter ─────────────────────────────────────────────────────────────────

/// Scatter of `y` against `x`, one colour per `hue` group, no fitted line.
pub fn plot_scatter(
    df: &DataFrame,
    x: &str,
    y: &str,
    hue: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let xs = column_options(df, x)?;
    let ys = column_options(df, y)?;
    let labels = group_labels(df, hue)?;

    let groups = pair_by_group(&labels, &xs, &ys);
    if groups.iter().all(|(_, pts)| pts.is_empty()) {
        return Err(AnalysisError::EmptyResult(format!("plotting {y} vs {x}")));
    }

    let (x_lo, x_hi) = bounds(groups.iter().flat_map(|(_, p)| p.iter().map(|pt| pt.0)));
    let (y_lo, y_hi) = bounds(groups.iter().flat_map(|(_, p)| p.iter().map(|pt| pt.1)));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{y} vs {x}"), ("sans-serif", 30))
        .margin(MARGIN)
        .x_label_area_size(60)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(
            padded_range(x_lo, x_hi, 0.05),
            padded_range(y_lo, y_hi, 0.05),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x)
        .y_desc(y)
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (i, (name, points)) in groups.iter().enumerate() {
        let color = palette_color(i);
        chart
            .draw_series(points.iter().map(|&pt| {
                EmptyElement::at(pt) + Polygon::new(diamond(MARKER_RADIUS), color.filled())
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(name.as_str())
            .legend(move |(lx, ly)| {
                EmptyElement::at((lx, ly)) + Polygon::new(diamond(5), color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Pixel offsets of a diamond marker around its anchor.
fn diamond(radius: i32) -> Vec<(i32, i32)> {
    vec![(0, -radius), (radius, 0), (0, radius), (-radius, 0)]
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Group non-null values by label, groups in first-appearance order.
/// Rows with a null label are dropped.
fn split_by_group(labels: &[Option<String>], values: &[Option<f64>]) -> Vec<(String, Vec<f64>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();

    for (label, value) in labels.iter().zip(values) {
        let Some(label) = label else { continue };
        let slot = *index.entry(label.as_str()).or_insert_with(|| {
            groups.push((label.clone(), Vec::new()));
            groups.len() - 1
        });
        if let Some(v) = value {
            groups[slot].1.push(*v);
        }
    }
    groups
}

/// Like [`split_by_group`] but for (x, y) pairs; a pair needs both values.
fn pair_by_group(
    labels: &[Option<String>],
    xs: &[Option<f64>],
    ys: &[Option<f64>],
) -> Vec<(String, Vec<(f64, f64)>)> {
    let pairs: Vec<Option<(f64, f64)>> = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for (label, pair) in labels.iter().zip(pairs) {
        let Some(label) = label else { continue };
        let slot = *index.entry(label.as_str()).or_insert_with(|| {
            groups.push((label.clone(), Vec::new()));
            groups.len() - 1
        });
        if let Some(pt) = pair {
            groups[slot].1.push(pt);
        }
    }
    groups
}

/// Tick label for a category axis: the group name at integer positions.
fn category_label(names: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// `lo..hi` widened by `frac` of its span on each side; a zero span widens by one unit.
fn padded_range(lo: f64, hi: f64, frac: f64) -> std::ops::Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0)..(hi + 1.0);
    }
    (lo - span * frac)..(hi + span * frac)
}

fn positive_or_one(v: f64) -> f64 {
    if v > 0.0 && v.is_finite() {
        v
    } else {
        1.0
    }
}

fn palette_color(i: usize) -> RGBColor {
    COLORBLIND[i % COLORBLIND.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn job(index: usize, kind: PlotKind) -> PlotJob {
        PlotJob { index, kind }
    }

    fn cases() -> DataFrame {
        df!(
            "CASE_SURGEON" => ["A", "B", "A", "B", "A", "C"],
            "SUP_COST" => [Some(10.0), Some(20.0), Some(12.0), None, Some(15.0), Some(30.0)],
            "PAT_AGE" => [Some(40.0), Some(50.0), None, Some(60.0), Some(45.0), Some(70.0)]
        )
        .unwrap()
    }

    #[test]
    fn test_file_names() {
        let box_plot = job(
            1,
            PlotKind::BoxWithDistribution {
                value: "TX_COST".into(),
            },
        );
        let violin = job(
            3,
            PlotKind::Violin {
                value: "TX_COST".into(),
                split: "CASE_SURGEON".into(),
            },
        );
        let scatter = job(
            5,
            PlotKind::Scatter {
                x: "PAT_AGE".into(),
                y: "TIME_REQUIRED".into(),
                hue: "CASE_SURGEON".into(),
            },
        );

        assert_eq!(box_plot.file_name(), "(1)TX_COST-All.png");
        assert_eq!(violin.file_name(), "(3)TX_COST by CASE_SURGEON.png");
        assert_eq!(scatter.file_name(), "(5)TIME_REQUIRED_v_PAT_AGE.png");
    }

    #[test]
    fn test_split_by_group_keeps_first_appearance_order() {
        let df = cases();
        let groups = split_by_group(
            &group_labels(&df, "CASE_SURGEON").unwrap(),
            &column_options(&df, "SUP_COST").unwrap(),
        );

        assert_eq!(
            groups,
            vec![
                ("A".to_string(), vec![10.0, 12.0, 15.0]),
                ("B".to_string(), vec![20.0]),
                ("C".to_string(), vec![30.0]),
            ]
        );
    }

    #[test]
    fn test_pair_by_group_drops_incomplete_pairs() {
        let df = cases();
        let groups = pair_by_group(
            &group_labels(&df, "CASE_SURGEON").unwrap(),
            &column_options(&df, "PAT_AGE").unwrap(),
            &column_options(&df, "SUP_COST").unwrap(),
        );

        assert_eq!(groups[0], ("A".to_string(), vec![(40.0, 10.0), (45.0, 15.0)]));
        assert_eq!(groups[1], ("B".to_string(), vec![(50.0, 20.0)]));
        assert_eq!(groups[2], ("C".to_string(), vec![(70.0, 30.0)]));
    }

    #[test]
    fn test_category_label() {
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(category_label(&names, 0.0), "A");
        assert_eq!(category_label(&names, 1.0), "B");
        assert_eq!(category_label(&names, 0.5), "");
        assert_eq!(category_label(&names, -0.5), "");
        assert_eq!(category_label(&names, 2.0), "");
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(0.0, 10.0, 0.1), -1.0..11.0);
        assert_eq!(padded_range(5.0, 5.0, 0.1), 4.0..6.0);
        assert_eq!(padded_range(f64::INFINITY, f64::NEG_INFINITY, 0.1), 0.0..1.0);
    }

    #[test]
    fn test_violin_outline_is_closed_and_symmetric() {
        let curve = vec![(1.0, 0.0), (2.0, 0.5), (3.0, 0.0)];
        let outline = violin_outline(4.0, &curve, 0.5);

        assert_eq!(outline.len(), 7);
        assert_eq!(outline.first(), outline.last());
        assert_eq!(outline[1], (4.25, 2.0));
        assert_eq!(outline[4], (3.75, 2.0));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let df = cases();
        let path = std::env::temp_dir().join("never_written.png");

        let result = plot_violin(&df, "TX_COST", "CASE_SURGEON", &path, (640, 480));
        assert!(matches!(result, Err(AnalysisError::MissingColumn(ref c)) if c == "TX_COST"));

        let result = plot_scatter(&df, "PAT_AGE", "SUP_COST", "ROOM", &path, (640, 480));
        assert!(matches!(result, Err(AnalysisError::MissingColumn(ref c)) if c == "ROOM"));
    }

    #[test]
    fn test_all_null_column_is_empty_result() {
        let df = df!(
            "CASE_SURGEON" => ["A", "B"],
            "SUP_COST" => [None::<f64>, None]
        )
        .unwrap();
        let path = std::env::temp_dir().join("never_written.png");

        let result = plot_box_w_dist(&df, "SUP_COST", &path, (640, 480));
        assert!(matches!(result, Err(AnalysisError::EmptyResult(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_all_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let df = cases();
        let jobs = [
            job(
                1,
                PlotKind::BoxWithDistribution {
                    value: "SUP_COST".into(),
                },
            ),
            job(
                2,
                PlotKind::Violin {
                    value: "SUP_COST".into(),
                    split: "CASE_SURGEON".into(),
                },
            ),
            job(
                3,
                PlotKind::Scatter {
                    x: "PAT_AGE".into(),
                    y: "SUP_COST".into(),
                    hue: "CASE_SURGEON".into(),
                },
            ),
        ];

        for job in &jobs {
            let path = dir.path().join(job.file_name());
            job.render(&df, &path, (640, 480)).unwrap();
            assert!(path.exists());
        }
    }
}
