use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::entities::{Packing, Rect, SPInstance};
use crate::io::ext_repr::{ExtPacking, ExtPlacedRect, ExtShelf};

/// Writes a rectangle list as one `width height` line per rectangle.
pub fn write_rect_list(rects: &[Rect], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for rect in rects {
        writeln!(writer, "{} {}", rect.width, rect.height)?;
    }
    writer.flush()?;
    info!(
        "[EXPORT] {} rectangles written to {}",
        rects.len(),
        path.display()
    );
    Ok(())
}

/// Converts a packing into its external representation.
pub fn export_packing(instance: &SPInstance, packing: &Packing) -> ExtPacking {
    ExtPacking {
        strip_width: packing.strip_width,
        height: packing.height,
        density: packing.density(instance),
        shelves: packing
            .shelves
            .iter()
            .map(|shelf| ExtShelf {
                y: shelf.y,
                height: shelf.height,
                rects: shelf
                    .rects
                    .iter()
                    .map(|pr| ExtPlacedRect {
                        x: pr.x,
                        y: pr.y,
                        width: pr.rect.width,
                        height: pr.rect.height,
                    })
                    .collect(),
            })
            .collect(),
    }
}
