use crate::types::Placement;
use image::RgbImage;

/// One output page: a fixed-size canvas holding a single placed source image
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    canvas: RgbImage,
    placement: Placement,
}

impl Page {
    pub(crate) fn new(canvas: RgbImage, placement: Placement) -> Self {
        Self { canvas, placement }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    /// Where the source image was pasted
    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn image(&self) -> &RgbImage {
        &self.canvas
    }
}
