//! Page geometry and pagination arithmetic.
//!
//! The captured bitmap is scaled to the full page width and then split
//! across pages by positional offset only: every page places the same
//! full-height image, shifted up by one page height per page, and relies
//! on the page boundary (MediaBox) to clip the visible slice. The bitmap
//! is never re-cropped.

/// Paper dimensions in PDF points (1 pt = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
}

/// A4 portrait, the single supported output format.
pub const A4_PORTRAIT: PageGeometry = PageGeometry {
    width: 595.28,
    height: 841.89,
};

impl PageGeometry {
    /// Height of the captured image once scaled to the full page width,
    /// preserving aspect ratio.
    pub fn scaled_height(&self, image_width: u32, image_height: u32) -> f64 {
        image_height as f64 * self.width / image_width as f64
    }

    /// Number of output pages for an image of the given scaled height.
    ///
    /// One page while the image fits; otherwise one page per started
    /// page-height slice (ceiling of the ratio).
    pub fn page_count(&self, scaled_height: f64) -> u32 {
        let mut pages = 1u32;
        let mut remaining = scaled_height - self.height;
        while remaining > 0.0 {
            pages += 1;
            remaining -= self.height;
        }
        pages
    }

    /// Vertical top-offset of the image on each page, in points.
    ///
    /// Page n (1-indexed) places the image at `-(n - 1) * height`, so the
    /// offsets decrease monotonically by exactly one page height.
    pub fn top_offsets(&self, scaled_height: f64) -> Vec<f64> {
        (0..self.page_count(scaled_height))
            .map(|n| -(n as f64) * self.height)
            .collect()
    }
}
