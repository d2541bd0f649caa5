use std::error::Error;

use ballistic_rust::core::window::fit_paths;
use chrono::Local;
use plotters::prelude::*;

const CHART_SIZE: (u32, u32) = (1200, 680);
const THEORY_COLOR: RGBColor = RGBColor(150, 156, 166);
const PREVIEW_COLOR: RGBColor = RGBColor(76, 141, 245);
const LIVE_COLOR: RGBColor = RGBColor(214, 48, 49);

pub(crate) fn write_svg(
    path: &str,
    live: &[(f64, f64)],
    preview: &[(f64, f64)],
    theory: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let (max_x, max_y) = fit_paths(&[live, preview, theory]);
    let title = format!(
        "Projectile flight - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    let series = [
        ("No resistance (theory)", theory, THEORY_COLOR, 1),
        ("Preview", preview, PREVIEW_COLOR, 2),
        ("Live flight", live, LIVE_COLOR, 3),
    ];
    for (label, points, color, width) in series {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(width),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
