use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::aggregate::SummaryRow;

const TILE: f32 = 60.0;
const MARGIN: f32 = 90.0;
const LEGEND_STEPS: usize = 32;

/// Reads a summary table (`N,H/W,ratio` header plus one row per cell) back in.
pub fn read_summary(path: &Path) -> Result<Vec<SummaryRow>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not open summary file: {}", path.display()))?;

    let mut rows = vec![];
    for (i, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        ensure!(
            fields.len() == 3,
            "line {}: expected 3 columns, got {}",
            i + 1,
            fields.len()
        );
        rows.push(SummaryRow {
            n_rects: fields[0]
                .trim()
                .parse()
                .with_context(|| format!("line {}: unparseable N column", i + 1))?,
            hw_ratio: fields[1]
                .trim()
                .parse()
                .with_context(|| format!("line {}: unparseable H/W column", i + 1))?,
            worst_ratio: fields[2]
                .trim()
                .parse()
                .with_context(|| format!("line {}: unparseable ratio column", i + 1))?,
        });
    }
    Ok(rows)
}

/// Renders the summary as a colored (N, H/W) grid: one tile per cell, color
/// mapped from the worst ratio, plus axis labels and a color scale.
/// The axes carry the same meaning as the summary columns; values between grid
/// points are not interpolated.
pub fn surface_to_svg(rows: &[SummaryRow]) -> Document {
    let n_axis: Vec<usize> = rows.iter().map(|r| r.n_rects).sorted().dedup().collect();
    let hw_axis: Vec<f32> = rows
        .iter()
        .map(|r| OrderedFloat(r.hw_ratio))
        .sorted()
        .dedup()
        .map(|v| v.0)
        .collect();

    let grid_w = n_axis.len() as f32 * TILE;
    let grid_h = hw_axis.len() as f32 * TILE;

    let (z_min, z_max) = rows
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), r| {
            (f32::min(lo, r.worst_ratio), f32::max(hi, r.worst_ratio))
        });

    let mut tiles = Group::new().set("id", "tiles");
    for row in rows {
        let Some(xi) = n_axis.iter().position(|&n| n == row.n_rects) else {
            continue;
        };
        let Some(yi) = hw_axis.iter().position(|&hw| hw == row.hw_ratio) else {
            continue;
        };
        // larger H/W towards the top
        let x = MARGIN + xi as f32 * TILE;
        let y = MARGIN + (hw_axis.len() - 1 - yi) as f32 * TILE;
        let tile = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", TILE)
            .set("height", TILE)
            .set("fill", ratio_color(row.worst_ratio, z_min, z_max).as_str())
            .add(Title::new(format!(
                "N={}, H/W={}, worst={}",
                row.n_rects, row.hw_ratio, row.worst_ratio
            )));
        tiles = tiles.add(tile);
    }

    let mut labels = Group::new()
        .set("id", "labels")
        .set("font-family", "monospace")
        .set("font-size", 12.0);
    for (xi, n) in n_axis.iter().enumerate() {
        labels = labels.add(
            Text::new(format!("{n}"))
                .set("x", MARGIN + xi as f32 * TILE + TILE / 2.0)
                .set("y", MARGIN + grid_h + 20.0)
                .set("text-anchor", "middle"),
        );
    }
    for (yi, hw) in hw_axis.iter().enumerate() {
        labels = labels.add(
            Text::new(format!("{hw}"))
                .set("x", MARGIN - 10.0)
                .set("y", MARGIN + (hw_axis.len() - 1 - yi) as f32 * TILE + TILE / 2.0)
                .set("text-anchor", "end"),
        );
    }
    labels = labels
        .add(
            Text::new("N (number of rectangles)")
                .set("x", MARGIN + grid_w / 2.0)
                .set("y", MARGIN + grid_h + 45.0)
                .set("text-anchor", "middle"),
        )
        .add(
            Text::new("OPT(I)/W")
                .set("x", MARGIN - 10.0)
                .set("y", MARGIN - 20.0)
                .set("text-anchor", "end"),
        )
        .add(
            Text::new("worst \u{3b1} = H/OPT(I) per (N, H/W) cell")
                .set("x", MARGIN + grid_w / 2.0)
                .set("y", MARGIN - 30.0)
                .set("text-anchor", "middle")
                .set("font-size", 14.0),
        );

    let legend = {
        let x = MARGIN + grid_w + 30.0;
        let step_h = grid_h / LEGEND_STEPS as f32;
        let mut legend = Group::new().set("id", "legend");
        for i in 0..LEGEND_STEPS {
            // top of the bar shows the maximum
            let t = 1.0 - i as f32 / (LEGEND_STEPS - 1) as f32;
            let value = z_min + t * (z_max - z_min);
            legend = legend.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", MARGIN + i as f32 * step_h)
                    .set("width", 15.0)
                    .set("height", step_h + 0.5)
                    .set("fill", ratio_color(value, z_min, z_max).as_str()),
            );
        }
        legend
            .add(
                Text::new(format!("{z_max:.4}"))
                    .set("x", x + 20.0)
                    .set("y", MARGIN + 10.0)
                    .set("font-family", "monospace")
                    .set("font-size", 12.0),
            )
            .add(
                Text::new(format!("{z_min:.4}"))
                    .set("x", x + 20.0)
                    .set("y", MARGIN + grid_h)
                    .set("font-family", "monospace")
                    .set("font-size", 12.0),
            )
    };

    Document::new()
        .set(
            "viewBox",
            (
                0.0,
                0.0,
                MARGIN + grid_w + 130.0,
                MARGIN + grid_h + 60.0,
            ),
        )
        .add(tiles)
        .add(labels)
        .add(legend)
}

/// Maps a worst ratio onto a compressed Plasma-like color scale.
fn ratio_color(value: f32, min: f32, max: f32) -> String {
    let t = if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    };
    let stops = [
        (13.0, 8.0, 135.0),
        (204.0, 71.0, 120.0),
        (240.0, 249.0, 33.0),
    ];
    let (from, to, t) = if t < 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    let r = from.0 + (to.0 - from.0) * t;
    let g = from.1 + (to.1 - from.1) * t;
    let b = from.2 + (to.2 - from.2) * t;
    format!("#{:02X}{:02X}{:02X}", r as u8, g as u8, b as u8)
}
