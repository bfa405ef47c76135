use anyhow::{Result, ensure};
use log::warn;
use rand::Rng;
use rand::rngs::SmallRng;
use shelf_rs::entities::Rect;

/// N independent uniformly sampled integer-valued rectangles within the given ranges.
pub fn uniform_rects(
    n: usize,
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
    rng: &mut SmallRng,
) -> Result<Vec<Rect>> {
    ensure!(
        min_width >= 1 && min_height >= 1,
        "dimensions must be at least 1"
    );
    ensure!(
        min_width <= max_width && min_height <= max_height,
        "invalid sampling ranges, [{min_width}, {max_width}] x [{min_height}, {max_height}]"
    );
    Ok((0..n)
        .map(|_| {
            let width = rng.random_range(min_width..=max_width);
            let height = rng.random_range(min_height..=max_height);
            Rect {
                width: width as f32,
                height: height as f32,
            }
        })
        .collect())
}

/// Generates `n` integer-valued rectangles that exactly partition a
/// `width x round(width * ratio)` master rectangle: repeatedly pick a random
/// splittable piece and cut it at a random coordinate, alternating the cut
/// axis. The total piece area equals the master area, so the area lower bound
/// of the generated instance approximates the target height/width ratio.
///
/// Deterministic for a given RNG state. May stop early (with a warning) when
/// all pieces are unit sized, which only happens for `n > width * height`.
pub fn guillotine_rects(width: u32, n: usize, ratio: f32, rng: &mut SmallRng) -> Vec<Rect> {
    if n == 0 || width == 0 {
        return vec![];
    }
    let master_height = u32::max(1, (width as f32 * ratio).round() as u32);

    let mut pieces: Vec<(u32, u32)> = Vec::with_capacity(n);
    pieces.push((width, master_height));

    let mut horizontal = true;
    while pieces.len() < n {
        let mut splittable = splittable_indices(&pieces, horizontal);
        if splittable.is_empty() {
            horizontal = !horizontal;
            splittable = splittable_indices(&pieces, horizontal);
        }
        if splittable.is_empty() {
            warn!(
                "[GEN] could not generate {} rectangles, stuck at {}: all pieces are unit sized",
                n,
                pieces.len()
            );
            break;
        }

        let idx = splittable[rng.random_range(0..splittable.len())];
        let (w, h) = pieces[idx];
        if horizontal {
            let cut = rng.random_range(1..w);
            pieces[idx] = (cut, h);
            pieces.push((w - cut, h));
        } else {
            let cut = rng.random_range(1..h);
            pieces[idx] = (w, cut);
            pieces.push((w, h - cut));
        }

        horizontal = !horizontal;
    }

    pieces
        .into_iter()
        .map(|(w, h)| Rect {
            width: w as f32,
            height: h as f32,
        })
        .collect()
}

fn splittable_indices(pieces: &[(u32, u32)], horizontal: bool) -> Vec<usize> {
    pieces
        .iter()
        .enumerate()
        .filter(|&(_, &(w, h))| if horizontal { w > 1 } else { h > 1 })
        .map(|(i, _)| i)
        .collect()
}
