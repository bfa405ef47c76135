use std::cmp::Reverse;
use std::error::Error;
use std::fmt;

use ordered_float::OrderedFloat;

use crate::entities::{Packing, Rect, Shelf};
use crate::util::assertions;

/// A rectangle is wider than the strip and can never be placed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct InfeasibleItem {
    pub rect_width: f32,
    pub strip_width: f32,
}

impl fmt::Display for InfeasibleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rectangle of width {} exceeds strip width {}",
            self.rect_width, self.strip_width
        )
    }
}

impl Error for InfeasibleItem {}

/// Packs `rects` into a strip of width `strip_width` with Next-Fit-Decreasing-Height:
/// sort the rectangles by decreasing height and fill shelves left to right,
/// opening a new shelf whenever the current one cannot fit the next rectangle.
///
/// The sort is stable; rectangles of equal height keep their input order. This
/// ordering determines the shelf boundaries and therefore the output height,
/// so it is part of the heuristic's contract.
///
/// An empty slice is valid and yields a packing of height 0. A rectangle wider
/// than the strip fails with [`InfeasibleItem`] and no partial packing.
pub fn pack(rects: &[Rect], strip_width: f32) -> Result<Packing, InfeasibleItem> {
    let mut sorted = rects.to_vec();
    sorted.sort_by_key(|r| Reverse(OrderedFloat(r.height)));

    let mut shelves: Vec<Shelf> = vec![];

    for rect in sorted {
        if rect.width > strip_width {
            return Err(InfeasibleItem {
                rect_width: rect.width,
                strip_width,
            });
        }

        let fits_on_current = shelves
            .last()
            .is_some_and(|shelf| shelf.occupied_width + rect.width <= strip_width);

        if !fits_on_current {
            let y = shelves.last().map_or(0.0, |shelf| shelf.y + shelf.height);
            shelves.push(Shelf::new(y));
        }
        if let Some(shelf) = shelves.last_mut() {
            shelf.place(rect);
        }
    }

    let height = shelves.iter().map(|shelf| shelf.height).sum();

    let packing = Packing {
        shelves,
        height,
        strip_width,
    };

    debug_assert!(assertions::packing_preserves_rects(&packing, rects));
    debug_assert!(assertions::shelves_within_strip(&packing));

    Ok(packing)
}
