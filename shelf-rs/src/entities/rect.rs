use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle to be packed. Dimensions are fixed; rotation is not supported.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "invalid rectangle, width: {width}, height: {height}"
        );
        Ok(Rect { width, height })
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
