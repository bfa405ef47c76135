use crate::entities::Rect;

/// Instance of the Strip Packing Problem: a set of rectangles to be packed into
/// a single strip with a fixed width and unbounded height.
#[derive(Debug, Clone)]
pub struct SPInstance {
    /// The rectangles to be packed. Duplicates are materialized as separate entries.
    pub rects: Vec<Rect>,
    /// The (fixed) width of the strip
    pub strip_width: f32,
    /// Optimal height, if known from a labelled benchmark instance
    pub known_opt_height: Option<f32>,
}

impl SPInstance {
    pub fn new(rects: Vec<Rect>, strip_width: f32) -> Self {
        Self {
            rects,
            strip_width,
            known_opt_height: None,
        }
    }

    pub fn with_known_opt_height(rects: Vec<Rect>, strip_width: f32, opt_height: f32) -> Self {
        Self {
            rects,
            strip_width,
            known_opt_height: Some(opt_height),
        }
    }

    /// Sum of the areas of all rectangles in the instance.
    pub fn rect_area(&self) -> f32 {
        self.rects.iter().map(|r| r.area()).sum()
    }

    pub fn n_rects(&self) -> usize {
        self.rects.len()
    }
}
