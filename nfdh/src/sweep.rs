use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shelf_rs::entities::SPInstance;
use shelf_rs::eval;
use shelf_rs::nfdh::pack;
use thousands::Separable;

use crate::config::SweepConfig;
use crate::generator;

/// One (N, H/W) coordinate of the benchmark grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub n_rects: usize,
    pub hw_ratio: f32,
}

impl Cell {
    /// Filename of the cell's artifact; encodes the cell identity.
    pub fn artifact_name(&self, iterations: usize) -> String {
        format!("N{}_IT{}_WH{}.csv", self.n_rects, iterations, self.hw_ratio)
    }
}

/// Figures of a finalized cell: the worst (maximum) ratio over all recorded
/// trials, plus best/average bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellOutcome {
    pub worst: f32,
    pub best: f32,
    pub avg: f32,
    pub recorded: usize,
}

/// Runs every (N, H/W) cell of the configured grid, writing one artifact per
/// cell into `output_folder`. Returns the outcome of each finalized cell.
pub fn run_sweep(config: &SweepConfig, output_folder: &Path) -> Result<Vec<(Cell, CellOutcome)>> {
    fs::create_dir_all(output_folder)
        .with_context(|| format!("could not create folder: {}", output_folder.display()))?;

    let base_seed = match config.prng_seed {
        Some(seed) => seed,
        None => rand::rng().random(),
    };
    info!("[SWEEP] base seed: {base_seed}");

    let mut outcomes = vec![];
    for &n_rects in &config.n_values {
        for &hw_ratio in &config.hw_ratios {
            let cell = Cell { n_rects, hw_ratio };
            if let Some(outcome) = run_cell(config, cell, base_seed, output_folder)? {
                outcomes.push((cell, outcome));
            }
        }
    }
    info!(
        "[SWEEP] finished, {}/{} cells finalized",
        outcomes.len(),
        config.n_values.len() * config.hw_ratios.len()
    );
    Ok(outcomes)
}

/// Runs all trials for one cell, appending one record per trial to the cell's
/// artifact and finalizing it with the trailing summary line. The summary line
/// is the finalized marker: an artifact without it must not be treated as
/// complete. Returns `None` when no trial succeeded (artifact left unfinalized).
pub fn run_cell(
    config: &SweepConfig,
    cell: Cell,
    base_seed: u64,
    output_folder: &Path,
) -> Result<Option<CellOutcome>> {
    let artifact_name = cell.artifact_name(config.iterations);
    let path = output_folder.join(&artifact_name);
    let file = File::create(&path)
        .with_context(|| format!("could not create artifact: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "#,H,OPT_H,H/OPT_H")?;

    let mut rng = SmallRng::seed_from_u64(cell_seed(base_seed, cell));

    let mut worst = f32::NEG_INFINITY;
    let mut best = f32::INFINITY;
    let mut sum = 0.0;
    let mut recorded = 0;

    for it in 1..=config.iterations {
        let rects = generator::guillotine_rects(
            config.strip_width.round() as u32,
            cell.n_rects,
            cell.hw_ratio,
            &mut rng,
        );
        let instance = SPInstance::new(rects, config.strip_width);

        let packing = match pack(&instance.rects, instance.strip_width) {
            Ok(packing) => packing,
            Err(e) => {
                // only this trial is lost; the cell keeps its recorded worst value
                warn!(
                    "[SWEEP] {artifact_name} trial {it}/{}: {e}",
                    config.iterations
                );
                continue;
            }
        };

        let lower_bound = eval::area_lower_bound(&instance);
        let ratio = keep_digits(eval::approx_ratio(packing.height, lower_bound), 4);

        worst = f32::max(worst, ratio);
        best = f32::min(best, ratio);
        sum += ratio;
        recorded += 1;

        writeln!(writer, "{},{},{},{}", it, packing.height, lower_bound, ratio)?;
    }

    if recorded == 0 {
        warn!("[SWEEP] {artifact_name}: no successful trials, artifact left unfinalized");
        writer.flush()?;
        return Ok(None);
    }

    let avg = sum / recorded as f32;
    writeln!(writer, "worst={worst},best={best},avg={avg}")?;
    writer.flush()?;

    info!(
        "[SWEEP] N={} H/W={}: {} trials, worst={worst}, best={best}, avg={avg}",
        cell.n_rects,
        cell.hw_ratio,
        recorded.separate_with_commas(),
    );

    Ok(Some(CellOutcome {
        worst,
        best,
        avg,
        recorded,
    }))
}

/// Distinct, stable PRNG stream per cell, derived from the base seed and the
/// cell coordinates (splitmix-style mixing).
fn cell_seed(base_seed: u64, cell: Cell) -> u64 {
    let mut seed = base_seed ^ 0x9E37_79B9_7F4A_7C15;
    seed = seed
        .wrapping_add(cell.n_rects as u64)
        .wrapping_mul(0xBF58_476D_1CE4_E5B9);
    seed = seed
        .wrapping_add(cell.hw_ratio.to_bits() as u64)
        .wrapping_mul(0x94D0_49BB_1331_11EB);
    seed ^ (seed >> 31)
}

fn keep_digits(value: f32, digits: i32) -> f32 {
    let precision = 10f32.powi(digits);
    (value * precision).round() / precision
}
