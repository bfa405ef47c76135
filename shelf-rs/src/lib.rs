//! Shelf-based strip packing: pack a set of rectangles, without rotation or
//! overlap, into a strip of fixed width and unbounded height while keeping the
//! used height low. Ships the Next-Fit-Decreasing-Height heuristic, an
//! area-based lower bound on the optimal height and the tooling to import
//! instances and render packings.

/// Entities to model strip packing instances and their packings
pub mod entities;

/// Lower bound and approximation-ratio computation
pub mod eval;

/// Importing problem instances into and exporting packings out of this library
pub mod io;

/// The Next-Fit-Decreasing-Height packing heuristic
pub mod nfdh;

/// Helper functions which do not belong to any specific module
pub mod util;
