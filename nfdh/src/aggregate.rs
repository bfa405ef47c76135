use std::error::Error;
use std::fmt;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use ordered_float::OrderedFloat;
use regex::Regex;

/// One finalized cell in the summary table. Write-once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub n_rects: usize,
    pub hw_ratio: f32,
    pub worst_ratio: f32,
}

/// Two artifacts claim the same (N, H/W) cell; silently picking one would hide
/// which sweep actually ran.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateCellConfiguration {
    pub n_rects: usize,
    pub hw_ratio: f32,
    pub artifact: String,
}

impl fmt::Display for DuplicateCellConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "artifact {:?} duplicates cell configuration N={}, H/W={}",
            self.artifact, self.n_rects, self.hw_ratio
        )
    }
}

impl Error for DuplicateCellConfiguration {}

/// Scans `input_folder` for cell artifacts and extracts one summary row per
/// finalized cell, sorted ascending by (N, H/W).
///
/// Artifacts with fewer than two lines or without a parseable `worst=` value
/// are skipped with a warning. Two artifacts claiming the same cell abort the
/// aggregation with [`DuplicateCellConfiguration`].
pub fn aggregate_folder(input_folder: &Path) -> Result<Vec<SummaryRow>> {
    let artifact_re = Regex::new(r"^N(\d+)_IT\d+_WH([\d.]+)\.csv$")?;

    let mut paths: Vec<PathBuf> = fs::read_dir(input_folder)
        .with_context(|| format!("could not read folder: {}", input_folder.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut rows: Vec<SummaryRow> = vec![];
    for path in paths {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let Some(caps) = artifact_re.captures(&file_name) else {
            continue;
        };

        let n_rects: usize = caps[1]
            .parse()
            .with_context(|| format!("rectangle count out of range in {file_name:?}"))?;
        let hw_ratio: f32 = match caps[2].parse() {
            Ok(v) => v,
            Err(_) => {
                warn!("[AGGREGATE] {file_name}: unparseable H/W tag, skipping");
                continue;
            }
        };

        let Some(worst_ratio) = read_worst_value(&path, &file_name) else {
            continue;
        };

        if rows
            .iter()
            .any(|row| row.n_rects == n_rects && row.hw_ratio == hw_ratio)
        {
            return Err(DuplicateCellConfiguration {
                n_rects,
                hw_ratio,
                artifact: file_name,
            }
            .into());
        }

        info!("[AGGREGATE] {file_name}: N={n_rects}, H/W={hw_ratio}, worst={worst_ratio}");
        rows.push(SummaryRow {
            n_rects,
            hw_ratio,
            worst_ratio,
        });
    }

    rows.sort_by_key(|row| (row.n_rects, OrderedFloat(row.hw_ratio)));
    Ok(rows)
}

/// Reads the `worst=` field of the artifact's trailing summary line.
/// Missing data is a warning, not a failure: the caller skips the artifact.
fn read_worst_value(path: &Path, file_name: &str) -> Option<f32> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("[AGGREGATE] {file_name}: unreadable ({e}), skipping");
            return None;
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 {
        warn!("[AGGREGATE] {file_name}: missing artifact data (fewer than two records), skipping");
        return None;
    }

    let summary_line = lines[lines.len() - 1];
    let worst = summary_line
        .split(',')
        .find_map(|field| field.strip_prefix("worst="))
        .and_then(|v| v.parse().ok());

    if worst.is_none() {
        warn!(
            "[AGGREGATE] {file_name}: missing artifact data (no worst= value in the summary line), skipping"
        );
    }
    worst
}

/// Writes the summary table: a `N,H/W,ratio` header plus one row per cell.
pub fn write_summary(rows: &[SummaryRow], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "N,H/W,ratio")?;
    for row in rows {
        writeln!(writer, "{},{},{}", row.n_rects, row.hw_ratio, row.worst_ratio)?;
    }
    writer.flush()?;
    info!(
        "[AGGREGATE] summary with {} rows written to {}",
        rows.len(),
        path.display()
    );
    Ok(())
}
