use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a sweep metric from CSV as a line chart"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/passes.png")]
    output: PathBuf,
    /// Metric column to plot (ground_distance_km or wait_hours)
    #[arg(long, default_value = "ground_distance_km")]
    metric: String,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (points, metric_column) = read_points(&cli.input, &cli.metric)?;

    if points.is_empty() {
        return Err(anyhow::anyhow!("No finite samples in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut x_max = 0.0f64;
    let mut y_max = 0.0f64;
    for &(x, y) in &points {
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    if x_max <= 0.0 {
        x_max = 1.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Overpass sweep".to_string(), caption_font)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Offset from epoch (hours)")
        .y_desc(metric_axis_label(&metric_column))
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&BLUE).stroke_width(2),
    ))?;

    let (min_x, min_y) = points
        .iter()
        .copied()
        .fold((0.0, f64::INFINITY), |best, p| {
            if p.1 < best.1 { p } else { best }
        });
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(min_x, 0.0), (min_x, y_max * 1.05)],
        ShapeStyle::from(&BLACK.mix(0.5)).stroke_width(1),
    )))?;
    let marker_color = RGBColor(210, 100, 20);
    chart.draw_series(std::iter::once(Circle::new(
        (min_x, min_y),
        4,
        marker_color.filled(),
    )))?;
    let annotation = format!("min = {:.2} at {:.2} h", min_y, min_x);
    let text_pos = (min_x + 0.02 * x_max, min_y + 0.04 * y_max);
    chart.draw_series(std::iter::once(Text::new(
        annotation,
        text_pos,
        label_font.clone().color(&marker_color),
    )))?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str, metric_name: &str) -> anyhow::Result<(Vec<(f64, f64)>, String)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let offset_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("offset_hours"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'offset_hours' column"))?;
    let metric_idx = resolve_metric_column(&headers, metric_name)
        .ok_or_else(|| anyhow::anyhow!("CSV missing metric column matching '{}'", metric_name))?;
    let metric_column = headers
        .get(metric_idx)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Invalid metric column index"))?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let offset: f64 = r.get(offset_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let value: f64 = r.get(metric_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if offset.is_finite() && value.is_finite() {
            points.push((offset, value));
        }
    }
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    Ok((points, metric_column))
}

fn resolve_metric_column(headers: &csv::StringRecord, metric_name: &str) -> Option<usize> {
    let direct = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(metric_name));
    if direct.is_some() {
        return direct;
    }
    let metric_lower = metric_name.to_lowercase();
    let fallback = match metric_lower.as_str() {
        "distance" => "ground_distance_km",
        "wait" => "wait_hours",
        other => other,
    };
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(fallback))
}

fn metric_axis_label(metric_column: &str) -> String {
    match metric_column.to_lowercase().as_str() {
        "ground_distance_km" => "Ground distance (km)".to_string(),
        "wait_hours" => "Estimated wait (h)".to_string(),
        other => other.to_string(),
    }
}
