// demos/heatmap.rs

//! Renders call and put heatmaps (raw value or P&L) over a spot × volatility
//! grid to SVG and writes the underlying matrices as CSV.
//!
//! Usage:
//!     cargo run --example heatmap -- [config.toml]
//!
//! Without a config file the 10 × 10 dashboard preset is used. Output files
//! `call_heatmap.svg`, `put_heatmap.svg`, `call_heatmap.csv` and
//! `put_heatmap.csv` land in the working directory. Set `RUST_LOG=debug` to see
//! the sweep being evaluated.

use std::env;

use anyhow::{Context, Result};
use bs_heatmap::{default_configs, HeatmapConfig, OptionType, PriceMatrix, ValueMode};
use plotters::prelude::*;

/// Red below zero, white at zero, green above, scaled by the largest magnitude.
fn pnl_color(value: f64, max_abs: f64) -> RGBColor {
    let t = if max_abs > 0.0 {
        (value / max_abs).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let fade = |full: u8, t: f64| (255.0 - (255.0 - full as f64) * t) as u8;
    if t < 0.0 {
        let t = -t;
        RGBColor(fade(215, t), fade(48, t), fade(39, t))
    } else {
        RGBColor(fade(26, t), fade(152, t), fade(80, t))
    }
}

fn title(matrix: &PriceMatrix) -> String {
    let leg = match matrix.option_type {
        OptionType::Call => "Call",
        OptionType::Put => "Put",
    };
    match matrix.mode {
        ValueMode::Price => format!("{leg} Value"),
        ValueMode::ProfitLoss { purchase_price } => {
            format!("{leg} Profit & Loss (bought at {purchase_price:.2})")
        }
    }
}

fn draw_heatmap(matrix: &PriceMatrix, path: &str) -> Result<()> {
    let (rows, cols) = matrix.shape();
    let max_abs = matrix.min().abs().max(matrix.max().abs());

    let root = SVGBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_fmt = |x: &f64| {
        matrix
            .spots
            .get(x.floor() as usize)
            .map(|s| format!("{s:.2}"))
            .unwrap_or_default()
    };
    let y_fmt = |y: &f64| {
        matrix
            .vols
            .get(y.floor() as usize)
            .map(|v| format!("{v:.2}"))
            .unwrap_or_default()
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title(matrix), ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .draw()?;

    chart.draw_series(matrix.values.iter().enumerate().flat_map(|(j, row)| {
        row.iter().enumerate().map(move |(i, &v)| {
            let (x, y) = (i as f64, j as f64);
            Rectangle::new([(x, y), (x + 1.0, y + 1.0)], pnl_color(v, max_abs).filled())
        })
    }))?;

    chart.draw_series(matrix.values.iter().enumerate().flat_map(|(j, row)| {
        row.iter().enumerate().map(move |(i, &v)| {
            Text::new(
                format!("{v:.2}"),
                (i as f64 + 0.25, j as f64 + 0.6),
                ("sans-serif", 12).into_font(),
            )
        })
    }))?;

    root.present()
        .with_context(|| format!("failed to write {path}"))?;
    Ok(())
}

fn write_csv(matrix: &PriceMatrix, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["volatility", "spot", "value"])?;
    for (vol, spot, value) in matrix.iter() {
        writer.write_record([vol.to_string(), spot.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn load_config() -> Result<HeatmapConfig> {
    match env::args().nth(1) {
        Some(path) => HeatmapConfig::from_file(&path),
        None => Ok(default_configs::dashboard()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    let pricing = config.pricing()?;
    tracing::info!(
        call = pricing.call_price,
        put = pricing.put_price,
        "priced contract at market point"
    );

    let heatmaps = config.run()?;
    for (matrix, stem) in [(&heatmaps.call, "call_heatmap"), (&heatmaps.put, "put_heatmap")] {
        let svg = format!("{stem}.svg");
        let csv_path = format!("{stem}.csv");
        draw_heatmap(matrix, &svg)?;
        write_csv(matrix, &csv_path)?;
        tracing::info!(
            svg = %svg,
            csv = %csv_path,
            min = matrix.min(),
            max = matrix.max(),
            "heatmap written"
        );
    }

    Ok(())
}
