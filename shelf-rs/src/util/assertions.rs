use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::{Packing, Rect};

/// Every input rectangle appears in exactly one shelf: no loss, no duplication.
pub fn packing_preserves_rects(packing: &Packing, rects: &[Rect]) -> bool {
    let sort_key = |r: &Rect| (OrderedFloat(r.height), OrderedFloat(r.width));

    let placed = packing
        .shelves
        .iter()
        .flat_map(|shelf| shelf.rects.iter().map(|pr| pr.rect))
        .sorted_by_key(sort_key)
        .collect_vec();
    let expected = rects.iter().copied().sorted_by_key(sort_key).collect_vec();

    placed == expected
}

/// No shelf occupies more width than the strip provides.
pub fn shelves_within_strip(packing: &Packing) -> bool {
    packing
        .shelves
        .iter()
        .all(|shelf| shelf.occupied_width <= packing.strip_width)
}

/// The packing's height equals the sum of its shelf heights.
pub fn height_matches_shelves(packing: &Packing) -> bool {
    let shelf_sum: f32 = packing.shelves.iter().map(|shelf| shelf.height).sum();
    shelf_sum == packing.height
}
