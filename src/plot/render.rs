//! Plotters drawing for the report charts (PNG via the bitmap backend).
//!
//! Every function takes fully prepared series; bounds and labels are derived
//! here but no table access happens during drawing.

use std::error::Error;
use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::{Palette, Palette99};

type DrawResult = Result<(), Box<dyn Error>>;

const BAR_COLOR: RGBColor = RGBColor(70, 130, 180); // steel blue
const POINT_COLOR: RGBColor = RGBColor(31, 119, 180);
/// Bar labels longer than this are shortened so neighbours don't collide.
const MAX_BAR_LABEL_CHARS: usize = 16;

/// Static description of a bar chart.
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub size: (u32, u32),
}

pub fn draw_bar_chart(path: &Path, layout: &BarChart<'_>, bars: &[(String, f64)]) -> DrawResult {
    let root = BitMapBackend::new(path, layout.size).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = upper_bound(bars.iter().map(|(_, v)| *v), 1.1);

    let mut chart = ChartBuilder::on(&root)
        .caption(layout.title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0.0..y_max)?;

    let label_for = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => bars
            .get(*i)
            .map(|(label, _)| short_label(label))
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len().max(1))
        .x_label_formatter(&label_for)
        .x_desc(layout.x_desc)
        .y_desc(layout.y_desc)
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(12)
            .data(bars.iter().enumerate().map(|(i, (_, v))| (i, *v))),
    )?;

    root.present()?;
    Ok(())
}

/// Proportional chart; slice labels carry the group name, slices their percentage.
pub fn draw_pie_chart(path: &Path, title: &str, size: (u32, u32), slices: &[(String, f64)]) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(title, ("sans-serif", 28))?;

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.36;

    let sizes: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
    let labels: Vec<&str> = slices.iter().map(|(label, _)| label.as_str()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| {
            let (r, g, b) = Palette99::COLORS[i % Palette99::COLORS.len()];
            RGBColor(r, g, b)
        })
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
    area.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Scatter of `(unit_price, quantity)` with translucent markers so dense
/// regions read darker.
pub fn draw_price_quantity_scatter(path: &Path, size: (u32, u32), points: &[(f64, f64)]) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = upper_bound(points.iter().map(|p| p.0), 1.05);
    let y_max = upper_bound(points.iter().map(|p| p.1), 1.05);

    let mut chart = ChartBuilder::on(&root)
        .caption("Price vs Quantity Distribution", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Unit Price ($)")
        .y_desc("Quantity")
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, POINT_COLOR.mix(0.6).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Axis upper bound with headroom; degenerate (empty/zero) data gets `1.0`.
fn upper_bound(values: impl Iterator<Item = f64>, headroom: f64) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max > 0.0 { max * headroom } else { 1.0 }
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= MAX_BAR_LABEL_CHARS {
        return label.to_string();
    }
    let mut out: String = label.chars().take(MAX_BAR_LABEL_CHARS - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bound_adds_headroom() {
        assert_eq!(upper_bound([10.0, 40.0].into_iter(), 1.5), 60.0);
        assert_eq!(upper_bound(std::iter::empty(), 1.1), 1.0);
        assert_eq!(upper_bound([0.0, f64::NAN].into_iter(), 1.1), 1.0);
    }

    #[test]
    fn long_labels_are_shortened() {
        assert_eq!(short_label("Dallas"), "Dallas");
        let long = short_label("Consolidated Auto Components");
        assert_eq!(long.chars().count(), MAX_BAR_LABEL_CHARS);
        assert!(long.ends_with('…'));
    }
}
