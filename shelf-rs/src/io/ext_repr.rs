use serde::{Deserialize, Serialize};

/// External representation of a [`Packing`](crate::entities::Packing)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPacking {
    pub strip_width: f32,
    /// Total strip height used by the packing
    pub height: f32,
    /// Fraction of the used strip area covered by rectangles
    pub density: f32,
    pub shelves: Vec<ExtShelf>,
}

/// External representation of a single shelf
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtShelf {
    pub y: f32,
    pub height: f32,
    pub rects: Vec<ExtPlacedRect>,
}

/// External representation of a placed rectangle
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
