use serde::{Deserialize, Serialize};

/// Options for drawing a [`Packing`](crate::entities::Packing) as an SVG document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    /// Fill color of the strip background
    pub strip_fill: String,
    /// Fill color of the packed rectangles
    pub rect_fill: String,
    /// Stroke color of all outlines
    pub stroke: String,
    /// Multiplier for the stroke width of all outlines
    pub stroke_width_multiplier: f32,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            strip_fill: "#FAFAFA".to_string(),
            rect_fill: "#7BB369".to_string(),
            stroke: "black".to_string(),
            stroke_width_multiplier: 2.0,
        }
    }
}
